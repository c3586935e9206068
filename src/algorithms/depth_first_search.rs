use rand::seq::SliceRandom as _;

use super::{MazeAlgorithm, Random};
use crate::{
    dims::Dims,
    error::MazeError,
    maze::{Board, CellFlags},
};

/// Randomized depth-first search, also known as the recursive backtracker.
///
/// Grows a single corridor from the origin into random unvisited neighbors and
/// backtracks along the frontier stack once a cell has none left. Produces long
/// winding corridors with few short branches.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn carve(
        &self,
        board: &mut Board,
        rng: &mut Random,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<(), MazeError> {
        let total = board.cell_count();
        let mut stack: Vec<Dims> = Vec::with_capacity(total);

        let origin = Dims::ZERO;
        board.mark(origin, CellFlags::VISITED);
        stack.push(origin);

        let mut visited = board.cells().filter(|cell| cell.is_visited()).count();

        while let Some(&current) = stack.last() {
            let next = board
                .neighbors(current)
                .choose(rng)
                .map(|cell| cell.pos());

            match next {
                Some(next) => {
                    let side = board.direction(current, next)?;
                    board.break_wall(current, next, side)?;
                    board.mark(next, CellFlags::VISITED);
                    stack.push(next);

                    visited += 1;
                    progress(visited, total);
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(())
    }
}
