//! This module contains the logic for deriving a playable puzzle from a
//! board.
//!
//! The puzzle view of a [SudokuBoard] is a copy of its tiles in which a set
//! of blank cells has been emptied. Which cells are blank is decided by
//! uniform sampling without replacement on the first access and cached for
//! the lifetime of the board, so the puzzle view is stable. Alternatively,
//! an explicit blank set can be provided at construction (see
//! [SudokuBoard::from_tiles_with_blanks]), which is never resampled.

use crate::{verify_blanks, CELL_COUNT, SudokuBoard};
use crate::error::SudokuResult;

use rand::Rng;
use rand::seq::index;

use std::collections::BTreeSet;

impl SudokuBoard {

    /// Gets the set of cell indices that are hidden in the puzzle view of
    /// this board. On the first access, [SudokuBoard::empty_slots] distinct
    /// indices are sampled uniformly from the board using the given random
    /// number generator. Afterwards the cached set is returned and the
    /// random number generator is not used.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator used to sample the blank set if
    /// it has not been computed yet.
    pub fn puzzle_blanks_with<R: Rng>(&mut self, rng: &mut R)
            -> &BTreeSet<usize> {
        if self.blanks().is_none() {
            // empty_slots <= CELL_COUNT is guaranteed at construction
            let sampled = index::sample(rng, CELL_COUNT, self.empty_slots())
                .into_iter()
                .collect();
            return self.cache_blanks(sampled);
        }

        self.blanks().unwrap()
    }

    /// Gets the set of cell indices that are hidden in the puzzle view of
    /// this board, sampling it with a
    /// [ThreadRng](rand::rngs::ThreadRng) if it has not been computed yet.
    /// See [SudokuBoard::puzzle_blanks_with] for details.
    pub fn puzzle_blanks(&mut self) -> &BTreeSet<usize> {
        self.puzzle_blanks_with(&mut rand::thread_rng())
    }

    /// Drops a previously computed or provided blank set. The next access to
    /// the puzzle view samples a fresh set, even on a board that was
    /// constructed with an explicit one.
    pub fn reset_blanks(&mut self) {
        self.drop_blanks();
    }

    /// Computes a copy of this board's tiles in which every cell whose index
    /// is contained in `blanks` is empty. The board itself is not changed.
    ///
    /// # Arguments
    ///
    /// * `blanks`: The indices of the cells to hide. All must be less than
    /// [CELL_COUNT].
    ///
    /// # Errors
    ///
    /// If any blank index is greater than or equal to [CELL_COUNT]. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn masked(&self, blanks: &BTreeSet<usize>)
            -> SudokuResult<Vec<Option<usize>>> {
        verify_blanks(blanks)?;
        let mut tiles = self.tiles().clone();

        for &index in blanks {
            tiles[index] = None;
        }

        Ok(tiles)
    }

    /// Computes the puzzle view of this board: a copy of its tiles in which
    /// the cells of the blank set are empty. The blank set is sampled with
    /// the given random number generator if it has not been computed yet.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator used to sample the blank set if
    /// it has not been computed yet.
    pub fn puzzle_tiles_with<R: Rng>(&mut self, rng: &mut R)
            -> Vec<Option<usize>> {
        self.puzzle_blanks_with(rng);
        let mut tiles = self.tiles().clone();

        if let Some(blanks) = self.blanks() {
            for &index in blanks {
                tiles[index] = None;
            }
        }

        tiles
    }

    /// Computes the puzzle view of this board, sampling the blank set with a
    /// [ThreadRng](rand::rngs::ThreadRng) if it has not been computed yet.
    /// See [SudokuBoard::puzzle_tiles_with] for details.
    pub fn puzzle_tiles(&mut self) -> Vec<Option<usize>> {
        self.puzzle_tiles_with(&mut rand::thread_rng())
    }
}
