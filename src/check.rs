//! This module contains the uniqueness checking logic that defines the rules
//! of the puzzle: no row, column, or block may contain a duplicate number.
//!
//! The free function [unique] checks a single sequence of values, while the
//! methods defined on [SudokuBoard] in this module compose it over regions:
//! [SudokuBoard::is_valid] checks all 27 regions, and [SudokuBoard::allows]
//! checks only the three regions affected by a hypothetical placement, which
//! is the pruning primitive used by the generator.

use crate::{
    coordinates_of,
    region_indices,
    BOARD_SIZE,
    CELL_COUNT,
    RegionKind,
    SudokuBoard
};
use crate::error::{SudokuError, SudokuResult};

/// Indicates whether the non-empty values of the given sequence contain no
/// duplicates. Empty cells are ignored, so a sequence without any numbers
/// trivially passes.
pub fn unique(values: &[Option<usize>]) -> bool {
    let mut numbers: Vec<usize> =
        values.iter().filter_map(|&value| value).collect();
    numbers.sort_unstable();
    numbers.windows(2).all(|pair| pair[0] != pair[1])
}

impl SudokuBoard {

    /// Indicates whether the board satisfies the Sudoku constraints, that
    /// is, no row, column, or block contains a duplicate number. Empty cells
    /// do not violate any constraint, so a completely empty board is valid.
    pub fn is_valid(&self) -> bool {
        let kinds = [RegionKind::Row, RegionKind::Column, RegionKind::Block];

        for &kind in &kinds {
            for number in 1..=BOARD_SIZE {
                // the numbers iterated here are in range by construction
                let values = self.region(kind, number).unwrap();

                if !unique(&values) {
                    return false;
                }
            }
        }

        true
    }

    /// Indicates whether every cell of the board is filled with a number.
    pub fn is_complete(&self) -> bool {
        self.tiles().iter().all(|tile| tile.is_some())
    }

    /// Indicates whether the board is a win, that is, it is both valid and
    /// complete.
    pub fn is_win(&self) -> bool {
        self.is_valid() && self.is_complete()
    }

    /// Indicates whether the given number could be placed in the cell at the
    /// given index without introducing a duplicate in its row, column, or
    /// block. The board itself is not changed; the hypothetical placement is
    /// checked on a scratch copy of the affected regions. A region that
    /// already contains a duplicate elsewhere also causes `false` to be
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the checked cell. Must be in the range
    /// `[0, 81[`.
    /// * `candidate`: The number whose placement is checked. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `index` is not in the specified
    /// range.
    /// * `SudokuError::InvalidNumber` If `candidate` is not in the specified
    /// range.
    pub fn allows(&self, index: usize, candidate: usize)
            -> SudokuResult<bool> {
        if index >= CELL_COUNT {
            return Err(SudokuError::OutOfBounds);
        }

        if candidate < 1 || candidate > BOARD_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        let (row, column, block) = coordinates_of(index)?;
        let regions = [
            (RegionKind::Row, row),
            (RegionKind::Column, column),
            (RegionKind::Block, block)
        ];

        for &(kind, number) in &regions {
            let indices = region_indices(kind, number)?;
            let mut values = [None; BOARD_SIZE];

            for (slot, &region_index) in indices.iter().enumerate() {
                values[slot] = if region_index == index {
                    Some(candidate)
                }
                else {
                    self.tiles()[region_index]
                };
            }

            if !unique(&values) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
