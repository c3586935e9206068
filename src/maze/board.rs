use smallvec::SmallVec;

use crate::{
    array::Array2D,
    dims::Dims,
    error::MazeError,
    maze::cell::{Cell, CellFlags, Direction},
};

/// Boundary cell whose outward-facing wall was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opening {
    pub pos: Dims,
    pub side: Direction,
}

/// Rectangular grid of cells.
///
/// The board owns every cell and all geometry: bounds, adjacency and wall
/// breaking. Algorithms only ever go through these helpers, so the wall bits of
/// two adjacent cells can't get out of sync.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2D<Cell>,
    width: u16,
    height: u16,
    entrance: Option<Opening>,
    exit: Option<Opening>,
}

impl Board {
    /// Creates a board with every cell walled in and unvisited.
    pub fn new(width: u16, height: u16) -> Result<Board, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidSize { width, height });
        }

        let cells = Array2D::from_fn(width as usize, height as usize, |pos| {
            Cell::new(pos.0 as u16, pos.1 as u16)
        });

        Ok(Board {
            cells,
            width,
            height,
            entrance: None,
            exit: None,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    /// Cell at column `x`, row `y`.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.get_cell(Dims::from((x, y)))
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        self.cells.row(y as usize)
    }

    /// Position of the cell on `side` of `pos`, if it's on the board.
    pub fn neighbor_pos(&self, pos: Dims, side: Direction) -> Option<Dims> {
        let other = pos + side.offset();
        (self.is_in_bounds(pos) && self.is_in_bounds(other)).then_some(other)
    }

    /// Adjacent cells of `pos` which weren't visited yet.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[&Cell; 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|side| self.neighbor_pos(pos, side))
            .map(|other| &self.cells[other])
            .filter(|cell| !cell.is_visited())
            .collect()
    }

    /// Side of `from` which faces `to`.
    pub fn direction(&self, from: Dims, to: Dims) -> Result<Direction, MazeError> {
        Direction::from_offset(to - from).ok_or(MazeError::NotAdjacent { from, to })
    }

    /// Removes the wall between `a` and `b`, `side` being the side of `a`.
    pub fn break_wall(&mut self, a: Dims, b: Dims, side: Direction) -> Result<(), MazeError> {
        for pos in [a, b] {
            if !self.is_in_bounds(pos) {
                return Err(MazeError::OutOfBounds(pos));
            }
        }
        if a + side.offset() != b {
            return Err(MazeError::NotAdjacent { from: a, to: b });
        }

        self.cells[a].remove_wall(side);
        self.cells[b].remove_wall(side.reverse());
        Ok(())
    }

    /// Whether `side` of `pos` faces the outside of the board.
    pub fn is_boundary_side(&self, pos: Dims, side: Direction) -> bool {
        self.is_in_bounds(pos) && !self.is_in_bounds(pos + side.offset())
    }

    pub fn entrance(&self) -> Option<Opening> {
        self.entrance
    }

    pub fn exit(&self) -> Option<Opening> {
        self.exit
    }

    /// Opens the outer wall on `side` of `pos` and makes it the entrance.
    ///
    /// A previous entrance gets its wall back.
    pub fn open_entrance(&mut self, pos: Dims, side: Direction) -> Result<(), MazeError> {
        let opening = self.check_opening(pos, side)?;
        let old = self.entrance.replace(opening);
        self.reopen(old, opening, self.exit);
        Ok(())
    }

    /// Opens the outer wall on `side` of `pos` and makes it the exit.
    ///
    /// A previous exit gets its wall back.
    pub fn open_exit(&mut self, pos: Dims, side: Direction) -> Result<(), MazeError> {
        let opening = self.check_opening(pos, side)?;
        let old = self.exit.replace(opening);
        self.reopen(old, opening, self.entrance);
        Ok(())
    }

    /// Entrance on the north side of the top-left cell, exit on the south side of
    /// the bottom-right one.
    pub fn open_default_ends(&mut self) -> Result<(), MazeError> {
        let last = self.size() - Dims(1, 1);
        self.open_entrance(Dims::ZERO, Direction::North)?;
        self.open_exit(last, Direction::South)
    }

    pub fn is_endpoint(&self, pos: Dims) -> bool {
        [self.entrance, self.exit]
            .into_iter()
            .flatten()
            .any(|opening| opening.pos == pos)
    }

    fn check_opening(&self, pos: Dims, side: Direction) -> Result<Opening, MazeError> {
        if !self.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }
        if !self.is_boundary_side(pos, side) {
            return Err(MazeError::NotOnBoundary { pos, side });
        }

        Ok(Opening { pos, side })
    }

    fn reopen(&mut self, old: Option<Opening>, new: Opening, other: Option<Opening>) {
        if let Some(old) = old.filter(|&old| Some(old) != other) {
            self.cells[old.pos].put_wall(old.side);
        }
        self.cells[new.pos].remove_wall(new.side);
    }

    /// Number of open sides of `pos` leading to a cell that isn't dead.
    ///
    /// Outer openings don't count, there is no cell behind them.
    pub fn open_degree(&self, pos: Dims) -> usize {
        let Some(cell) = self.get_cell(pos) else {
            return 0;
        };

        Direction::ALL
            .into_iter()
            .filter(|&side| cell.is_open(side))
            .filter_map(|side| self.neighbor_pos(pos, side))
            .filter(|&other| !self.cells[other].is_dead())
            .count()
    }

    /// Walks the cells that are not dead from the entrance to the exit.
    ///
    /// Returns `None` when an opening is missing or the live cells don't form a
    /// single corridor, e.g. before the board was solved.
    pub fn solution_path(&self) -> Option<Vec<Dims>> {
        let start = self.entrance?.pos;
        let goal = self.exit?.pos;

        let mut path = vec![start];
        let mut prev: Option<Dims> = None;
        let mut current = start;

        while current != goal {
            let next = Direction::ALL
                .into_iter()
                .filter(|&side| self.cells[current].is_open(side))
                .filter_map(|side| self.neighbor_pos(current, side))
                .filter(|&other| Some(other) != prev && !self.cells[other].is_dead())
                .collect::<SmallVec<[_; 4]>>();

            if next.len() != 1 || path.len() >= self.cell_count() {
                return None;
            }

            prev = Some(current);
            current = next[0];
            path.push(current);
        }

        Some(path)
    }

    pub(crate) fn mark(&mut self, pos: Dims, flag: CellFlags) {
        self.cells[pos].set(flag);
    }
}
