//! Presentation model for the web front end.
//!
//! Every cell becomes a list of class names the stylesheet understands: `p`
//! marks the solution path, `north`, `south`, `east` and `west` mark walls that
//! are up. The entrance and the exit have their walls actually removed on the
//! board, so they show up as gaps without special casing.

use serde::Serialize;

use crate::maze::{Board, Cell, Direction};

pub const PATH_CLASS: &str = "p";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellModel {
    pub x: u16,
    pub y: u16,
    pub classes: Vec<&'static str>,
}

impl CellModel {
    pub fn from_cell(cell: &Cell) -> Self {
        let mut classes = Vec::with_capacity(5);
        if !cell.is_dead() {
            classes.push(PATH_CLASS);
        }
        classes.extend(
            Direction::ALL
                .into_iter()
                .filter(|&side| cell.has_wall(side))
                .map(wall_class),
        );

        Self {
            x: cell.x(),
            y: cell.y(),
            classes,
        }
    }

    /// Classes joined with spaces, ready for a `class` attribute.
    pub fn css_classes(&self) -> String {
        self.classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardModel {
    pub width: u16,
    pub height: u16,
    /// Indexed `[y][x]`, one row per board row.
    pub cells: Vec<Vec<CellModel>>,
}

impl BoardModel {
    pub fn from_board(board: &Board) -> Self {
        let cells = (0..board.height())
            .filter_map(|y| board.row(y))
            .map(|row| row.iter().map(CellModel::from_cell).collect())
            .collect();

        Self {
            width: board.width(),
            height: board.height(),
            cells,
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&CellModel> {
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
    }
}

pub fn wall_class(side: Direction) -> &'static str {
    match side {
        Direction::North => "north",
        Direction::South => "south",
        Direction::East => "east",
        Direction::West => "west",
    }
}
