pub mod board;
pub use board::{Board, Opening};
pub mod cell;
pub use cell::{Cell, CellFlags, Direction};
pub mod render;
pub use render::{render, render_solution, render_to_string};
