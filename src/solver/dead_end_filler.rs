use super::Solver;
use crate::{
    dims::Dims,
    error::MazeError,
    maze::{Board, CellFlags},
};

/// Fills dead ends until only the corridor between the entrance and the exit
/// is left.
///
/// Every pass marks cells with at most one live open side as dead. On a perfect
/// maze this strips leaves off the spanning tree until the unique path remains.
/// Walls are never touched, only [`CellFlags::DEAD`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadEndFiller;

impl Solver for DeadEndFiller {
    fn solve(&self, board: &mut Board) -> Result<usize, MazeError> {
        let entrance = board
            .entrance()
            .ok_or(MazeError::MissingOpening("entrance"))?;
        let exit = board.exit().ok_or(MazeError::MissingOpening("exit"))?;

        log::debug!(
            "Filling dead ends between {} and {}",
            entrance.pos,
            exit.pos
        );

        let size = board.size();
        let mut total = 0;
        let mut pass = 0usize;

        loop {
            let mut set_new = 0;
            for pos in Dims::iter_fill(Dims::ZERO, size) {
                if pos == entrance.pos || pos == exit.pos {
                    continue;
                }
                if board.get_cell(pos).map_or(true, |cell| cell.is_dead()) {
                    continue;
                }

                if board.open_degree(pos) <= 1 {
                    board.mark(pos, CellFlags::DEAD);
                    set_new += 1;
                }
            }

            pass += 1;
            log::trace!("Pass {} marked {} cells", pass, set_new);

            if set_new == 0 {
                break;
            }
            total += set_new;
        }

        log::debug!("Marked {} dead cells in {} passes", total, pass);
        Ok(total)
    }
}
