mod depth_first_search;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

pub use depth_first_search::DepthFirstSearch;

use crate::{error::MazeError, maze::Board};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a walled-in board.
///
/// Implementations must only touch walls through [`Board::break_wall`], so every
/// algorithm shares the same geometry.
pub trait MazeAlgorithm: fmt::Debug {
    /// `progress` receives `(visited, total)` cell counts.
    fn carve(
        &self,
        board: &mut Board,
        rng: &mut Random,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<(), MazeError>;
}

/// Owns the random source of a generation run.
#[derive(Debug, Clone)]
pub struct Generator {
    seed: u64,
    rng: Random,
}

impl Generator {
    /// Seeds from `seed`, or from the thread rng if none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        Self {
            seed,
            rng: Random::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with, use it to reproduce a maze.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&mut self, board: &mut Board) -> Result<(), MazeError> {
        self.generate_with_progress(board, |_, _| {})
    }

    pub fn generate_with_progress(
        &mut self,
        board: &mut Board,
        progress: impl FnMut(usize, usize),
    ) -> Result<(), MazeError> {
        self.generate_with(&DepthFirstSearch, board, progress)
    }

    pub fn generate_with(
        &mut self,
        algorithm: &dyn MazeAlgorithm,
        board: &mut Board,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<(), MazeError> {
        log::debug!(
            "Generating {}x{} maze using {:?}, seed {}",
            board.width(),
            board.height(),
            algorithm,
            self.seed
        );

        algorithm.carve(board, &mut self.rng, &mut progress)?;

        log::debug!("Maze generated");
        Ok(())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Fully walled-in board of the given size.
pub fn new_board(width: u16, height: u16) -> Result<Board, MazeError> {
    Board::new(width, height)
}

/// Carves `board` in place and returns the seed that was used.
pub fn generate(board: &mut Board, seed: Option<u64>) -> Result<u64, MazeError> {
    let mut generator = Generator::new(seed);
    generator.generate(board)?;
    Ok(generator.seed())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{
        dims::Dims,
        maze::{render_to_string, CellFlags, Direction},
    };

    fn generated(width: u16, height: u16, seed: u64) -> Board {
        let mut board = new_board(width, height).unwrap();
        generate(&mut board, Some(seed)).unwrap();
        board
    }

    fn flags(board: &Board) -> Vec<CellFlags> {
        board.cells().map(|cell| cell.flags()).collect()
    }

    fn edge_count(board: &Board) -> usize {
        board
            .cells()
            .flat_map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(move |&side| cell.is_open(side))
                    .filter_map(move |side| board.neighbor_pos(cell.pos(), side))
            })
            .count()
    }

    fn reachable(board: &Board) -> usize {
        let mut seen = vec![false; board.cell_count()];
        let mut queue = VecDeque::from([Dims::ZERO]);
        let idx = |pos: Dims| (pos.1 * board.width() as i32 + pos.0) as usize;
        seen[0] = true;

        let mut count = 0;
        while let Some(pos) = queue.pop_front() {
            count += 1;
            let cell = board.get_cell(pos).unwrap();
            for side in Direction::ALL {
                if cell.has_wall(side) {
                    continue;
                }
                if let Some(next) = board.neighbor_pos(pos, side) {
                    if !seen[idx(next)] {
                        seen[idx(next)] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        count
    }

    #[test]
    fn every_cell_is_visited() {
        for (w, h, seed) in [(1, 1, 0), (1, 7, 1), (9, 1, 2), (10, 10, 3), (23, 17, 4)] {
            let board = generated(w, h, seed);
            assert!(board.cells().all(|cell| cell.is_visited()), "{w}x{h}");
            assert!(board.cells().all(|cell| !cell.is_dead()));
        }
    }

    #[test]
    fn spanning_tree() {
        for (w, h, seed) in [(2, 2, 7), (5, 3, 8), (16, 16, 9), (40, 20, 10)] {
            let board = generated(w, h, seed);
            let cells = w as usize * h as usize;
            assert_eq!(edge_count(&board), cells - 1, "{w}x{h}");
            assert_eq!(reachable(&board), cells, "{w}x{h}");
        }
    }

    #[test]
    fn walls_are_consistent() {
        let board = generated(12, 9, 11);
        for cell in board.cells() {
            for side in Direction::ALL {
                match board.neighbor_pos(cell.pos(), side) {
                    Some(other) => {
                        let other = board.get_cell(other).unwrap();
                        assert_eq!(cell.has_wall(side), other.has_wall(side.reverse()));
                    }
                    None => assert!(cell.has_wall(side), "outer walls stay up"),
                }
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generated(20, 15, 1234);
        let b = generated(20, 15, 1234);
        assert_eq!(flags(&a), flags(&b));

        let mut generator = Generator::new(Some(99));
        assert_eq!(generator.seed(), 99);
        let mut c = new_board(20, 15).unwrap();
        generator.generate(&mut c).unwrap();
        assert_eq!(flags(&c), flags(&generated(20, 15, 99)));
    }

    #[test]
    fn random_seed_is_reported() {
        let mut board = new_board(6, 6).unwrap();
        let seed = generate(&mut board, None).unwrap();
        assert_eq!(flags(&board), flags(&generated(6, 6, seed)));
    }

    #[test]
    fn single_cell() {
        let board = generated(1, 1, 5);
        let cell = board.cell(0, 0).unwrap();
        assert!(cell.is_visited());
        assert_eq!(cell.flags(), CellFlags::WALLS | CellFlags::VISITED);
    }

    #[test]
    fn generating_twice_changes_nothing() {
        let mut board = generated(8, 8, 21);
        let before = flags(&board);
        generate(&mut board, Some(22)).unwrap();
        assert_eq!(flags(&board), before);
    }

    #[test]
    fn progress_counts_visited_cells() {
        let mut board = new_board(4, 5).unwrap();
        let mut calls = Vec::new();
        Generator::new(Some(3))
            .generate_with_progress(&mut board, |done, total| calls.push((done, total)))
            .unwrap();

        assert_eq!(calls.len(), 19);
        assert_eq!(calls.first(), Some(&(2, 20)));
        assert_eq!(calls.last(), Some(&(20, 20)));
    }

    #[test]
    fn two_by_two_golden() {
        // Depth-first growth from the origin always walks around the 2x2 square,
        // leaving exactly one of the origin's walls up.
        const VIA_EAST: &str = "   _\n|_  |\n|_  |\n";
        const VIA_SOUTH: &str = "   _\n| | |\n|_  |\n";

        assert_eq!(render_to_string(&generated(2, 2, 0)), VIA_EAST);
        assert_eq!(render_to_string(&generated(2, 2, 1)), VIA_EAST);
        assert_eq!(render_to_string(&generated(2, 2, 2)), VIA_SOUTH);
        assert_eq!(render_to_string(&generated(2, 2, 4)), VIA_SOUTH);

        for seed in 0..16 {
            let text = render_to_string(&generated(2, 2, seed));
            assert!(text == VIA_EAST || text == VIA_SOUTH, "seed {seed}:\n{text}");
        }
    }
}
