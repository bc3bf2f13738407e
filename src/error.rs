//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// An enumeration of the errors that can occur on methods of this crate. All
/// fallible operations, such as construction from a tile sequence, region
/// queries, or generation, report one of these variants.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that a supplied tile sequence does not contain exactly 81
    /// entries. Tile sequences are never truncated or padded.
    WrongTileCount,

    /// Indicates that some tile value is invalid. This is the case if it is
    /// less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that a cell index lies outside the board (i.e. is greater
    /// than 80) or a region number lies outside the range `[1, 9]`.
    OutOfBounds,

    /// Indicates that the requested number of puzzle blanks exceeds the
    /// number of cells on the board.
    InvalidBlankCount,

    /// An error that is raised if the generator exhausts all candidates for
    /// the first cell without completing the board. For a standard 9x9 board
    /// this does not occur in practice, but it is representable nonetheless.
    UnsatisfiableBoard
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::WrongTileCount =>
                write!(f, "tile sequence does not contain 81 entries"),
            SudokuError::InvalidNumber =>
                write!(f, "number outside the range [1, 9]"),
            SudokuError::OutOfBounds =>
                write!(f, "cell index or region number out of bounds"),
            SudokuError::InvalidBlankCount =>
                write!(f, "more blanks requested than cells on the board"),
            SudokuError::UnsatisfiableBoard =>
                write!(f, "no candidate sequence completes the board")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;
