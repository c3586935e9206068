mod dead_end_filler;

pub use dead_end_filler::DeadEndFiller;

use crate::{error::MazeError, maze::Board};

/// Marks every cell off the solution path of a board.
pub trait Solver {
    /// Returns how many cells were newly marked dead.
    fn solve(&self, board: &mut Board) -> Result<usize, MazeError>;
}

/// Solves `board` in place with [`DeadEndFiller`].
///
/// The entrance and the exit must be opened first.
pub fn solve(board: &mut Board) -> Result<usize, MazeError> {
    DeadEndFiller.solve(board)
}
