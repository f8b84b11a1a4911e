//! Input rejection types for slot selection
//!
//! This module defines [`InputError`], the reasons a line typed at the prompt
//! can fail to name a slot. None of these are fatal: the session reports the
//! message and asks again.
//!
//! The `Display` text of each variant is the exact message shown to the user.

use thiserror::Error;

/// Reasons a line of input does not name a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Normalized input is not exactly two characters long
    #[error("Invalid input! Please use format like A1, B2, etc.")]
    InvalidFormat,

    /// First character is not a row letter
    #[error("Invalid row! Please use A, B, or C.")]
    InvalidRow,

    /// Second character is not a column digit
    #[error("Invalid column! Please use 1, 2, or 3.")]
    InvalidColumn,
}
