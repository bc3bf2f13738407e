// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Querying rows, columns, and blocks of a board
//! * Checking validity, completeness, and win state of a board
//! * Generating full boards using a randomized backtracking algorithm
//! * Deriving a playable puzzle from a full board by hiding a random subset
//! of cells
//!
//! The board is always 9x9 with 3x3 blocks. Rows, columns, and blocks are
//! numbered 1 to 9, while cells are addressed by a flat index in the range
//! `[0, 80]` in row-major order (index 0 is row 1, column 1).
//!
//! # Checking a board
//!
//! A [SudokuBoard] is constructed either empty or from a sequence of 81
//! tiles, where each tile is a number from 1 to 9 or empty. Construction
//! validates the sequence and fails on wrong lengths or invalid numbers.
//!
//! ```
//! use sudoku_classic::SudokuBoard;
//!
//! let tiles = vec![
//!     5, 3, 4, 6, 7, 8, 9, 1, 2,
//!     6, 7, 2, 1, 9, 5, 3, 4, 8,
//!     1, 9, 8, 3, 4, 2, 5, 6, 7,
//!     8, 5, 9, 7, 6, 1, 4, 2, 3,
//!     4, 2, 6, 8, 5, 3, 7, 9, 1,
//!     7, 1, 3, 9, 2, 4, 8, 5, 6,
//!     9, 6, 1, 5, 3, 7, 2, 8, 4,
//!     2, 8, 7, 4, 1, 9, 6, 3, 5,
//!     3, 4, 5, 2, 8, 6, 1, 7, 9
//! ].into_iter().map(Some).collect();
//! let board = SudokuBoard::from_tiles(tiles).unwrap();
//!
//! assert!(board.is_valid());
//! assert!(board.is_complete());
//! assert!(board.is_win());
//! assert_eq!([Some(5), Some(3), Some(4), Some(6), Some(7), Some(8),
//!     Some(9), Some(1), Some(2)], board.row(1).unwrap());
//! ```
//!
//! # Generating boards
//!
//! A [Generator](generator::Generator) fills a board with random digits
//! that satisfy the row, column, and block uniqueness constraints. It uses
//! the `Rng` trait from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate, so a
//! seeded random number generator can be injected for reproducible results.
//!
//! ```
//! use sudoku_classic::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let board = generator.generate().unwrap();
//!
//! assert!(board.is_win());
//! ```
//!
//! # Deriving puzzles
//!
//! A playable puzzle is obtained by hiding a random subset of cells of a
//! full board. The set of hidden cells is sampled once on first access and
//! cached afterwards, so the puzzle view of a board is stable.
//!
//! ```
//! use sudoku_classic::generator::Generator;
//!
//! let mut board = Generator::new_default().generate().unwrap();
//! let puzzle = board.puzzle_tiles();
//!
//! assert_eq!(41, puzzle.iter().filter(|tile| tile.is_some()).count());
//! ```

pub mod check;
pub mod error;
pub mod generator;
pub mod puzzle;

use error::{SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::convert::TryFrom;

/// The number of rows, columns, and blocks of a board, which is also the
/// number of cells in each of them.
pub const BOARD_SIZE: usize = 9;

/// The total number of cells on a board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The number of cells that are hidden in the puzzle view of a board unless
/// configured otherwise.
pub const DEFAULT_EMPTY_SLOTS: usize = 40;

/// An enumeration of the kinds of regions into which a board is partitioned.
/// Each kind partitions the 81 cells into 9 regions of 9 cells, and each
/// region is subject to the uniqueness constraint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RegionKind {

    /// A horizontal line of 9 cells.
    Row,

    /// A vertical line of 9 cells.
    Column,

    /// A 3x3 sub-grid, one of 9 tiling the board.
    Block
}

/// Computes the 1-based row, column, and block numbers of the cell with the
/// given flat index.
///
/// # Arguments
///
/// * `index`: The flat index of the cell. Must be in the range
/// `[0, 81[`.
///
/// # Errors
///
/// If `index` is not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn coordinates_of(index: usize) -> SudokuResult<(usize, usize, usize)> {
    if index >= CELL_COUNT {
        return Err(SudokuError::OutOfBounds);
    }

    let row = index / BOARD_SIZE + 1;
    let column = index % BOARD_SIZE + 1;
    let block = (row - 1) / 3 * 3 + (column - 1) / 3 + 1;
    Ok((row, column, block))
}

/// Computes the ordered flat indices of the cells of the region with the
/// given kind and number. Rows and columns are listed left-to-right and
/// top-to-bottom respectively, blocks in row-major order within the block.
///
/// # Arguments
///
/// * `kind`: The [RegionKind] of the queried region.
/// * `number`: The 1-based number of the queried region. Must be in the
/// range `[1, 9]`.
///
/// # Errors
///
/// If `number` is not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn region_indices(kind: RegionKind, number: usize)
        -> SudokuResult<[usize; BOARD_SIZE]> {
    if number < 1 || number > BOARD_SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    let mut indices = [0; BOARD_SIZE];

    match kind {
        RegionKind::Row => {
            let start = (number - 1) * BOARD_SIZE;

            for (slot, index) in indices.iter_mut().enumerate() {
                *index = start + slot;
            }
        },
        RegionKind::Column => {
            let start = number - 1;

            for (slot, index) in indices.iter_mut().enumerate() {
                *index = start + slot * BOARD_SIZE;
            }
        },
        RegionKind::Block => {
            let base = (number - 1) / 3 * 3 * BOARD_SIZE + (number - 1) % 3 * 3;

            for (slot, index) in indices.iter_mut().enumerate() {
                *index = base + slot / 3 * BOARD_SIZE + slot % 3;
            }
        }
    }

    Ok(indices)
}

/// Computes the sorted, duplicate-free indices of all cells that share a
/// row, column, or block with the cell at the given index, including the
/// cell itself. This is useful for highlighting related cells in a UI. The
/// result always contains 21 indices.
///
/// # Arguments
///
/// * `index`: The flat index of the cell whose neighbours are queried. Must
/// be in the range `[0, 81[`.
///
/// # Errors
///
/// If `index` is not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn neighbours(index: usize) -> SudokuResult<Vec<usize>> {
    let (row, column, block) = coordinates_of(index)?;
    let mut result = Vec::with_capacity(3 * BOARD_SIZE);
    result.extend_from_slice(&region_indices(RegionKind::Row, row)?);
    result.extend_from_slice(&region_indices(RegionKind::Column, column)?);
    result.extend_from_slice(&region_indices(RegionKind::Block, block)?);
    result.sort_unstable();
    result.dedup();
    Ok(result)
}

fn verify_tiles(tiles: &[Option<usize>]) -> SudokuResult<()> {
    if tiles.len() != CELL_COUNT {
        return Err(SudokuError::WrongTileCount);
    }

    for tile in tiles {
        if let Some(number) = tile {
            if *number < 1 || *number > BOARD_SIZE {
                return Err(SudokuError::InvalidNumber);
            }
        }
    }

    Ok(())
}

pub(crate) fn verify_blanks(blanks: &BTreeSet<usize>) -> SudokuResult<()> {
    // sets iterate in ascending order, so checking the last entry suffices
    if let Some(&highest) = blanks.iter().next_back() {
        if highest >= CELL_COUNT {
            return Err(SudokuError::OutOfBounds);
        }
    }

    Ok(())
}

/// The raw data of a [SudokuBoard] as it is serialized. Going through this
/// type on deserialization ensures that deserialized boards satisfy the same
/// well-formedness conditions as constructed ones.
#[derive(Clone, Deserialize, Serialize)]
struct RawBoard {
    tiles: Vec<Option<usize>>,
    empty_slots: usize,
    blanks: Option<BTreeSet<usize>>,
    blanks_fixed: bool
}

/// A classic 9x9 Sudoku board. Each of the 81 cells may or may not be
/// occupied by a number from 1 to 9. Cells are addressed by their flat index
/// in the range `[0, 80]`, in row-major order.
///
/// Besides the tiles themselves, a board carries the configuration of its
/// puzzle view: the number of cells to hide ([SudokuBoard::empty_slots]) and,
/// once computed or explicitly provided, the set of hidden cell indices (see
/// [SudokuBoard::puzzle_blanks]).
///
/// Validity, completeness, and win checks are defined in the
/// [check](crate::check) module, generation in the
/// [generator](crate::generator) module, and the puzzle view in the
/// [puzzle](crate::puzzle) module.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "RawBoard")]
#[serde(try_from = "RawBoard")]
pub struct SudokuBoard {
    tiles: Vec<Option<usize>>,
    empty_slots: usize,
    blanks: Option<BTreeSet<usize>>,

    // distinguishes an explicitly provided blank set, which survives
    // clearing the board, from a lazily sampled one, which does not
    blanks_fixed: bool
}

impl SudokuBoard {

    /// Creates a new, empty board whose puzzle view hides
    /// [DEFAULT_EMPTY_SLOTS] cells.
    pub fn new() -> SudokuBoard {
        SudokuBoard {
            tiles: vec![None; CELL_COUNT],
            empty_slots: DEFAULT_EMPTY_SLOTS,
            blanks: None,
            blanks_fixed: false
        }
    }

    /// Creates a new, empty board whose puzzle view hides the given number
    /// of cells.
    ///
    /// # Arguments
    ///
    /// * `empty_slots`: The number of cells hidden in the puzzle view. Must
    /// be less than or equal to [CELL_COUNT].
    ///
    /// # Errors
    ///
    /// If `empty_slots` is greater than [CELL_COUNT]. In that case,
    /// `SudokuError::InvalidBlankCount` is returned.
    pub fn with_empty_slots(empty_slots: usize) -> SudokuResult<SudokuBoard> {
        if empty_slots > CELL_COUNT {
            return Err(SudokuError::InvalidBlankCount);
        }

        Ok(SudokuBoard {
            tiles: vec![None; CELL_COUNT],
            empty_slots,
            blanks: None,
            blanks_fixed: false
        })
    }

    /// Creates a new board holding the given tile sequence, which may be
    /// partially or completely filled. Note that it is *not* checked whether
    /// the tiles satisfy the Sudoku constraints - it is perfectly legal to
    /// create an invalid board here.
    ///
    /// # Arguments
    ///
    /// * `tiles`: The tiles of the board in row-major order, where `None`
    /// represents an empty cell. Must contain exactly [CELL_COUNT] entries
    /// with numbers in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::WrongTileCount` If `tiles` does not contain exactly
    /// [CELL_COUNT] entries.
    /// * `SudokuError::InvalidNumber` If any tile holds a number outside the
    /// range `[1, 9]`.
    pub fn from_tiles(tiles: Vec<Option<usize>>) -> SudokuResult<SudokuBoard> {
        verify_tiles(&tiles)?;

        Ok(SudokuBoard {
            tiles,
            empty_slots: DEFAULT_EMPTY_SLOTS,
            blanks: None,
            blanks_fixed: false
        })
    }

    /// Creates a new board holding the given tile sequence together with an
    /// explicit set of puzzle blanks. The blanks are fixed for the lifetime
    /// of the board and never resampled, and the number of hidden cells is
    /// the size of the given set.
    ///
    /// # Arguments
    ///
    /// * `tiles`: The tiles of the board in row-major order, where `None`
    /// represents an empty cell. Must contain exactly [CELL_COUNT] entries
    /// with numbers in the range `[1, 9]`.
    /// * `blanks`: The indices of the cells hidden in the puzzle view. All
    /// must be less than [CELL_COUNT].
    ///
    /// # Errors
    ///
    /// * `SudokuError::WrongTileCount` If `tiles` does not contain exactly
    /// [CELL_COUNT] entries.
    /// * `SudokuError::InvalidNumber` If any tile holds a number outside the
    /// range `[1, 9]`.
    /// * `SudokuError::OutOfBounds` If any blank index is greater than or
    /// equal to [CELL_COUNT].
    pub fn from_tiles_with_blanks(tiles: Vec<Option<usize>>,
            blanks: BTreeSet<usize>) -> SudokuResult<SudokuBoard> {
        verify_tiles(&tiles)?;
        verify_blanks(&blanks)?;

        Ok(SudokuBoard {
            tiles,
            empty_slots: blanks.len(),
            blanks: Some(blanks),
            blanks_fixed: true
        })
    }

    /// Gets a reference to the vector which holds the tiles. They are in
    /// row-major order, i.e. left-to-right, top-to-bottom.
    pub fn tiles(&self) -> &Vec<Option<usize>> {
        &self.tiles
    }

    /// Gets the content of the cell at the specified index.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the desired cell. Must be in the range
    /// `[0, 81[`.
    ///
    /// # Errors
    ///
    /// If `index` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn tile(&self, index: usize) -> SudokuResult<Option<usize>> {
        if index >= CELL_COUNT {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.tiles[index])
        }
    }

    /// Sets the content of the cell at the specified index to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the assigned cell. Must be in the range
    /// `[0, 81[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `index` is not in the specified
    /// range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_tile(&mut self, index: usize, number: usize)
            -> SudokuResult<()> {
        if index >= CELL_COUNT {
            return Err(SudokuError::OutOfBounds);
        }

        if number < 1 || number > BOARD_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.tiles[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified index, that is, if it
    /// contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `index`: The flat index of the cleared cell. Must be in the range
    /// `[0, 81[`.
    ///
    /// # Errors
    ///
    /// If `index` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear_tile(&mut self, index: usize) -> SudokuResult<()> {
        if index >= CELL_COUNT {
            return Err(SudokuError::OutOfBounds);
        }

        self.tiles[index] = None;
        Ok(())
    }

    /// Clears every cell of the board and drops a cached blank set that was
    /// sampled for the previous content, if any. An explicitly provided
    /// blank set is kept.
    pub fn clear(&mut self) {
        for tile in self.tiles.iter_mut() {
            *tile = None;
        }

        self.drop_blank_cache();
    }

    /// Counts the number of filled cells of the board, i.e. the number of
    /// cells which contain a number.
    pub fn count_filled(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    /// Gets the number of cells that are hidden in the puzzle view of this
    /// board.
    pub fn empty_slots(&self) -> usize {
        self.empty_slots
    }

    /// Gets the ordered values of the cells of the region with the given
    /// kind and number. Empty cells are represented by `None`.
    ///
    /// # Arguments
    ///
    /// * `kind`: The [RegionKind] of the queried region.
    /// * `number`: The 1-based number of the queried region. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// If `number` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn region(&self, kind: RegionKind, number: usize)
            -> SudokuResult<[Option<usize>; BOARD_SIZE]> {
        let indices = region_indices(kind, number)?;
        let mut values = [None; BOARD_SIZE];

        for (slot, &index) in indices.iter().enumerate() {
            values[slot] = self.tiles[index];
        }

        Ok(values)
    }

    /// Gets the ordered values of the cells of the row with the given
    /// 1-based number. Equivalent to [SudokuBoard::region] with
    /// [RegionKind::Row].
    ///
    /// # Errors
    ///
    /// If `number` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row(&self, number: usize)
            -> SudokuResult<[Option<usize>; BOARD_SIZE]> {
        self.region(RegionKind::Row, number)
    }

    /// Gets the ordered values of the cells of the column with the given
    /// 1-based number. Equivalent to [SudokuBoard::region] with
    /// [RegionKind::Column].
    ///
    /// # Errors
    ///
    /// If `number` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column(&self, number: usize)
            -> SudokuResult<[Option<usize>; BOARD_SIZE]> {
        self.region(RegionKind::Column, number)
    }

    /// Gets the values of the cells of the 3x3 block with the given 1-based
    /// number, in row-major order within the block. Equivalent to
    /// [SudokuBoard::region] with [RegionKind::Block].
    ///
    /// # Errors
    ///
    /// If `number` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn block(&self, number: usize)
            -> SudokuResult<[Option<usize>; BOARD_SIZE]> {
        self.region(RegionKind::Block, number)
    }

    pub(crate) fn drop_blank_cache(&mut self) {
        if !self.blanks_fixed {
            self.blanks = None;
        }
    }

    pub(crate) fn drop_blanks(&mut self) {
        self.blanks = None;
        self.blanks_fixed = false;
    }

    pub(crate) fn blanks(&self) -> Option<&BTreeSet<usize>> {
        self.blanks.as_ref()
    }

    pub(crate) fn cache_blanks(&mut self, blanks: BTreeSet<usize>)
            -> &BTreeSet<usize> {
        self.blanks.get_or_insert(blanks)
    }
}

impl Default for SudokuBoard {
    fn default() -> SudokuBoard {
        SudokuBoard::new()
    }
}

impl From<SudokuBoard> for RawBoard {
    fn from(board: SudokuBoard) -> RawBoard {
        RawBoard {
            tiles: board.tiles,
            empty_slots: board.empty_slots,
            blanks: board.blanks,
            blanks_fixed: board.blanks_fixed
        }
    }
}

impl TryFrom<RawBoard> for SudokuBoard {
    type Error = SudokuError;

    fn try_from(raw: RawBoard) -> SudokuResult<SudokuBoard> {
        verify_tiles(&raw.tiles)?;

        if raw.empty_slots > CELL_COUNT {
            return Err(SudokuError::InvalidBlankCount);
        }

        if let Some(blanks) = &raw.blanks {
            verify_blanks(blanks)?;
        }

        Ok(SudokuBoard {
            tiles: raw.tiles,
            empty_slots: raw.empty_slots,
            blanks: raw.blanks,
            blanks_fixed: raw.blanks_fixed
        })
    }
}

#[cfg(test)]
pub(crate) mod testdata {

    use crate::SudokuBoard;

    /// The tile values of a solved board used as a fixture across the test
    /// modules of this crate.
    pub(crate) const SOLVED_TILES: [usize; 81] = [
        5, 3, 4, 6, 7, 8, 9, 1, 2,
        6, 7, 2, 1, 9, 5, 3, 4, 8,
        1, 9, 8, 3, 4, 2, 5, 6, 7,
        8, 5, 9, 7, 6, 1, 4, 2, 3,
        4, 2, 6, 8, 5, 3, 7, 9, 1,
        7, 1, 3, 9, 2, 4, 8, 5, 6,
        9, 6, 1, 5, 3, 7, 2, 8, 4,
        2, 8, 7, 4, 1, 9, 6, 3, 5,
        3, 4, 5, 2, 8, 6, 1, 7, 9
    ];

    pub(crate) fn solved_board() -> SudokuBoard {
        let tiles = SOLVED_TILES.iter().map(|&n| Some(n)).collect();
        SudokuBoard::from_tiles(tiles).unwrap()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::testdata;

    fn some(values: [usize; BOARD_SIZE]) -> [Option<usize>; BOARD_SIZE] {
        let mut result = [None; BOARD_SIZE];

        for (slot, &value) in values.iter().enumerate() {
            result[slot] = Some(value);
        }

        result
    }

    #[test]
    fn new_board_is_empty() {
        let board = SudokuBoard::new();

        assert_eq!(CELL_COUNT, board.tiles().len());
        assert_eq!(0, board.count_filled());
        assert_eq!(DEFAULT_EMPTY_SLOTS, board.empty_slots());
    }

    #[test]
    fn from_tiles_rejects_wrong_length() {
        assert_eq!(Err(SudokuError::WrongTileCount),
            SudokuBoard::from_tiles(vec![None; 80]));
        assert_eq!(Err(SudokuError::WrongTileCount),
            SudokuBoard::from_tiles(vec![None; 82]));
    }

    #[test]
    fn from_tiles_rejects_invalid_numbers() {
        let mut tiles = vec![None; CELL_COUNT];
        tiles[13] = Some(0);
        assert_eq!(Err(SudokuError::InvalidNumber),
            SudokuBoard::from_tiles(tiles));

        let mut tiles = vec![None; CELL_COUNT];
        tiles[80] = Some(10);
        assert_eq!(Err(SudokuError::InvalidNumber),
            SudokuBoard::from_tiles(tiles));
    }

    #[test]
    fn from_tiles_with_blanks_rejects_out_of_bounds_blank() {
        let tiles = vec![None; CELL_COUNT];
        let blanks = [0usize, 40, 81].iter().cloned().collect();

        assert_eq!(Err(SudokuError::OutOfBounds),
            SudokuBoard::from_tiles_with_blanks(tiles, blanks));
    }

    #[test]
    fn with_empty_slots_rejects_too_many() {
        assert_eq!(Err(SudokuError::InvalidBlankCount),
            SudokuBoard::with_empty_slots(82));
        assert!(SudokuBoard::with_empty_slots(81).is_ok());
    }

    #[test]
    fn coordinates_of_corners_and_center() {
        assert_eq!(Ok((1, 1, 1)), coordinates_of(0));
        assert_eq!(Ok((1, 9, 3)), coordinates_of(8));
        assert_eq!(Ok((4, 1, 4)), coordinates_of(27));
        assert_eq!(Ok((5, 5, 5)), coordinates_of(40));
        assert_eq!(Ok((9, 1, 7)), coordinates_of(72));
        assert_eq!(Ok((9, 9, 9)), coordinates_of(80));
    }

    #[test]
    fn coordinates_of_out_of_bounds() {
        assert_eq!(Err(SudokuError::OutOfBounds), coordinates_of(81));
    }

    #[test]
    fn row_indices() {
        assert_eq!(Ok([0, 1, 2, 3, 4, 5, 6, 7, 8]),
            region_indices(RegionKind::Row, 1));
        assert_eq!(Ok([36, 37, 38, 39, 40, 41, 42, 43, 44]),
            region_indices(RegionKind::Row, 5));
        assert_eq!(Ok([72, 73, 74, 75, 76, 77, 78, 79, 80]),
            region_indices(RegionKind::Row, 9));
    }

    #[test]
    fn column_indices() {
        assert_eq!(Ok([0, 9, 18, 27, 36, 45, 54, 63, 72]),
            region_indices(RegionKind::Column, 1));
        assert_eq!(Ok([8, 17, 26, 35, 44, 53, 62, 71, 80]),
            region_indices(RegionKind::Column, 9));
    }

    #[test]
    fn block_indices() {
        assert_eq!(Ok([0, 1, 2, 9, 10, 11, 18, 19, 20]),
            region_indices(RegionKind::Block, 1));
        assert_eq!(Ok([33, 34, 35, 42, 43, 44, 51, 52, 53]),
            region_indices(RegionKind::Block, 6));
        assert_eq!(Ok([60, 61, 62, 69, 70, 71, 78, 79, 80]),
            region_indices(RegionKind::Block, 9));
    }

    #[test]
    fn region_indices_out_of_bounds() {
        assert_eq!(Err(SudokuError::OutOfBounds),
            region_indices(RegionKind::Row, 0));
        assert_eq!(Err(SudokuError::OutOfBounds),
            region_indices(RegionKind::Block, 10));
    }

    #[test]
    fn solved_board_regions() {
        let board = testdata::solved_board();

        assert_eq!(Ok(some([5, 3, 4, 6, 7, 8, 9, 1, 2])), board.row(1));
        assert_eq!(Ok(some([8, 5, 9, 7, 6, 1, 4, 2, 3])), board.row(4));
        assert_eq!(Ok(some([5, 6, 1, 8, 4, 7, 9, 2, 3])), board.column(1));
        assert_eq!(Ok(some([3, 7, 9, 5, 2, 1, 6, 8, 4])), board.column(2));
        assert_eq!(Ok(some([5, 3, 4, 6, 7, 2, 1, 9, 8])), board.block(1));
        assert_eq!(Ok(some([8, 5, 9, 4, 2, 6, 7, 1, 3])), board.block(4));
    }

    #[test]
    fn neighbours_of_left_edge_cell() {
        // index 27 is row 4, column 1, block 4
        let expected = vec![
            0, 9, 18,
            27, 28, 29, 30, 31, 32, 33, 34, 35,
            36, 37, 38,
            45, 46, 47,
            54, 63, 72
        ];

        assert_eq!(Ok(expected), neighbours(27));
    }

    #[test]
    fn neighbours_count_is_constant() {
        for index in 0..CELL_COUNT {
            assert_eq!(21, neighbours(index).unwrap().len());
        }
    }

    #[test]
    fn neighbours_out_of_bounds() {
        assert_eq!(Err(SudokuError::OutOfBounds), neighbours(81));
    }

    #[test]
    fn set_and_clear_tile() {
        let mut board = SudokuBoard::new();

        board.set_tile(40, 7).unwrap();
        assert_eq!(Ok(Some(7)), board.tile(40));
        assert_eq!(1, board.count_filled());

        board.clear_tile(40).unwrap();
        assert_eq!(Ok(None), board.tile(40));
        assert_eq!(0, board.count_filled());
    }

    #[test]
    fn tile_mutation_errors() {
        let mut board = SudokuBoard::new();

        assert_eq!(Err(SudokuError::OutOfBounds), board.set_tile(81, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_tile(0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_tile(0, 10));
        assert_eq!(Err(SudokuError::OutOfBounds), board.clear_tile(81));
        assert_eq!(Err(SudokuError::OutOfBounds), board.tile(81));
    }

    #[test]
    fn clear_empties_all_tiles() {
        let mut board = testdata::solved_board();
        board.clear();

        assert_eq!(0, board.count_filled());
    }

    #[test]
    fn serde_round_trip() {
        let board = testdata::solved_board();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: SudokuBoard = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }

    #[test]
    fn serde_rejects_invalid_tiles() {
        let board = testdata::solved_board();
        let json = serde_json::to_string(&board).unwrap();
        let tampered = json.replace("5", "25");

        assert!(serde_json::from_str::<SudokuBoard>(&tampered).is_err());
    }
}
