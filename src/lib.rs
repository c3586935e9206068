pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod logging;
pub mod maze;
pub mod model;
pub mod settings;
pub mod solver;

pub use algorithms::{generate, new_board, Generator};
pub use error::MazeError;
pub use maze::{Board, Cell, CellFlags, Direction};
pub use solver::solve;
