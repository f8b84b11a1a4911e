//! Vending machine state
//!
//! This module provides the core machine abstractions:
//! - [`grid`]: The 3x3 availability grid and dispensing
//! - [`slot`]: Slot references and input validation
//! - [`errors`]: Input rejection reasons
//!
//! # Slot Codes
//!
//! A slot is named by a row letter followed by a column digit:
//! ```text
//! A1 A2 A3
//! B1 B2 B3
//! C1 C2 C3
//! ```
//! Codes are case-insensitive and surrounding whitespace is ignored.

pub mod constants;
pub mod errors;
pub mod grid;
pub mod slot;

pub use errors::InputError;
pub use grid::{Dispense, Grid};
pub use slot::SlotRef;
