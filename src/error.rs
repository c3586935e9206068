use thiserror::Error;

use crate::{dims::Dims, maze::Direction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Invalid board size {width}x{height}, both dimensions must be non-zero")]
    InvalidSize { width: u16, height: u16 },
    #[error("Cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Dims, to: Dims },
    #[error("Position {0} is out of bounds")]
    OutOfBounds(Dims),
    #[error("Side {side:?} of cell {pos} is not on the boundary")]
    NotOnBoundary { pos: Dims, side: Direction },
    #[error("No {0} has been opened on the board")]
    MissingOpening(&'static str),
}
