//! This module contains the logic for generating random full boards.
//!
//! Generation is done by a [Generator], which fills a [SudokuBoard] cell by
//! cell using a randomized recursive backtracking search. At each cell, the
//! candidates that do not collide with the numbers already placed in its
//! row, column, and block are tried in a uniformly shuffled order. If none
//! of them leads to a completed board, the cell is reverted and the search
//! backtracks to the previous cell.

use crate::{
    coordinates_of,
    region_indices,
    BOARD_SIZE,
    CELL_COUNT,
    RegionKind,
    SudokuBoard
};
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly generates a full [SudokuBoard], that is, a board
/// with no missing digits. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 1..len {
        let j = rng.gen_range((i - 1)..len);
        vec.swap(i - 1, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Computes the candidates for the cell at the given index, i.e. the
    /// numbers not yet present in its row, column, or block, in a uniformly
    /// shuffled order. Every candidate keeps the board valid, so no further
    /// check is needed before placing one.
    fn candidates(&mut self, board: &SudokuBoard, index: usize) -> Vec<usize> {
        let (row, column, block) = coordinates_of(index).unwrap();
        let regions = [
            (RegionKind::Row, row),
            (RegionKind::Column, column),
            (RegionKind::Block, block)
        ];
        let mut used = [false; BOARD_SIZE + 1];

        for &(kind, number) in &regions {
            for &region_index in &region_indices(kind, number).unwrap() {
                if let Some(present) = board.tiles()[region_index] {
                    used[present] = true;
                }
            }
        }

        let free = (1..=BOARD_SIZE).filter(|&number| !used[number]);
        shuffle(&mut self.rng, free)
    }

    fn fill_rec(&mut self, board: &mut SudokuBoard, index: usize) -> bool {
        if index == CELL_COUNT {
            return true;
        }

        for number in self.candidates(board, index) {
            board.set_tile(index, number).unwrap();

            if self.fill_rec(board, index + 1) {
                return true;
            }
        }

        board.clear_tile(index).unwrap();
        false
    }

    /// Rebuilds the given [SudokuBoard] from scratch with random digits.
    /// Any digits already present are discarded, as is a blank set that was
    /// sampled for the previous content (an explicitly provided blank set is
    /// kept).
    ///
    /// If no error is returned, it is guaranteed that [SudokuBoard::is_win]
    /// on `board` returns `true` after this operation. Otherwise, the board
    /// is left completely empty.
    ///
    /// # Arguments
    ///
    /// * `board`: The board to rebuild with random digits.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableBoard` If the search exhausts all
    /// candidates for the first cell. This does not occur in practice for a
    /// 9x9 board, but callers must treat it as an ordinary failure.
    pub fn fill(&mut self, board: &mut SudokuBoard) -> SudokuResult<()> {
        board.clear();

        if self.fill_rec(board, 0) {
            Ok(())
        }
        else {
            board.clear();
            Err(SudokuError::UnsatisfiableBoard)
        }
    }

    /// Generates a new random full [SudokuBoard] with default puzzle
    /// configuration.
    ///
    /// It is guaranteed that [SudokuBoard::is_win] on the result returns
    /// `true`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableBoard` If the search exhausts all
    /// candidates for the first cell. This does not occur in practice for a
    /// 9x9 board, but callers must treat it as an ordinary failure.
    pub fn generate(&mut self) -> SudokuResult<SudokuBoard> {
        let mut board = SudokuBoard::new();
        self.fill(&mut board)?;
        Ok(board)
    }
}
