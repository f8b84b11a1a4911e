//! Slot references and input validation

use super::constants::{COLS, COL_DIGITS, ROWS, ROW_LETTERS};
use super::errors::InputError;
use std::fmt;
use std::str::FromStr;

/// A validated position in the grid.
///
/// Both indices are always in range, so a `SlotRef` can index a
/// [`Grid`](super::Grid) without bounds checks failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    row: usize,
    col: usize,
}

impl SlotRef {
    /// Slot at the given indices, or `None` when either is out of range
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(SlotRef { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Parse a raw input line into a slot reference.
    ///
    /// Leading and trailing control characters and spaces (everything up to
    /// U+0020) are stripped and the rest is upper-cased. Checks run in a fixed order
    /// (length, then row, then column) so that input such as `"D9"` reports
    /// the row rather than the column.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let normalized = input.trim_matches(|c: char| c <= ' ').to_uppercase();

        let mut chars = normalized.chars();
        let (row_char, col_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => (r, c),
            _ => return Err(InputError::InvalidFormat),
        };

        let row = ROW_LETTERS
            .iter()
            .position(|&l| l == row_char)
            .ok_or(InputError::InvalidRow)?;
        let col = COL_DIGITS
            .iter()
            .position(|&d| d == col_char)
            .ok_or(InputError::InvalidColumn)?;

        Ok(SlotRef { row, col })
    }
}

impl FromStr for SlotRef {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotRef::parse(s)
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LETTERS[self.row], COL_DIGITS[self.col])
    }
}
