//! Text rendering of a board.
//!
//! Each cell takes two columns: the floor glyph (`_` when the south wall is up)
//! and the side glyph (`|` when the east wall is up). The top border leaves a gap
//! above the top-left cell and the bottom-right cell is always drawn open, those
//! are the entrance and the exit of the default layout.

use std::{fmt, io};

use crate::maze::{board::Board, cell::Cell, Direction};

const FLOOR: &str = "_";
const SIDE: &str = "|";
const OPEN: &str = " ";
const PATH: &str = "*";

pub fn render(board: &Board, out: &mut impl io::Write) -> io::Result<()> {
    out.write_all(board.to_string().as_bytes())
}

/// Same as [`render`], but cells which aren't dead get `*` as their floor.
pub fn render_solution(board: &Board, out: &mut impl io::Write) -> io::Result<()> {
    out.write_all(SolutionView(board).to_string().as_bytes())
}

pub fn render_to_string(board: &Board) -> String {
    board.to_string()
}

fn write_grid(
    board: &Board,
    out: &mut impl fmt::Write,
    on_path: impl Fn(&Cell) -> bool,
) -> fmt::Result {
    let (width, height) = (board.width(), board.height());

    out.write_str("  ")?;
    for _ in 1..width {
        out.write_str(" _")?;
    }
    out.write_str("\n")?;

    for y in 0..height {
        let Some(row) = board.row(y) else {
            break;
        };

        out.write_str(SIDE)?;
        for cell in row {
            let floor = match (on_path(cell), cell.has_wall(Direction::South)) {
                (true, _) => PATH,
                (false, true) => FLOOR,
                (false, false) => OPEN,
            };

            if cell.x() == width - 1 && y == height - 1 {
                let exit = if on_path(cell) { PATH } else { OPEN };
                write!(out, "{exit}{SIDE}")?;
                break;
            }

            let side = if cell.has_wall(Direction::East) {
                SIDE
            } else {
                OPEN
            };
            write!(out, "{floor}{side}")?;
        }
        out.write_str("\n")?;
    }

    Ok(())
}

/// Board with the live cells drawn as the path.
struct SolutionView<'a>(&'a Board);

impl fmt::Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self.0, f, |cell| !cell.is_dead())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(self, f, |_| false)
    }
}
