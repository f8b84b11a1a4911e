//! # Introduction
//!
//! Vendo simulates a vending machine with a 3x3 grid of slots in a plain text
//! terminal. The user types a slot code such as `B2`; the machine hands out
//! the item, says the slot is empty, or explains what was wrong with the
//! input. The session ends once every slot has been emptied.
//!
//! ## Session pipeline
//!
//! ```text
//! Grid → Render → Prompt → Validate → Dispense → (repeat until empty)
//! ```
//!
//! 1. [`machine`]: the availability [`machine::Grid`], slot codes
//!    ([`machine::SlotRef`]) and input rejection reasons.
//! 2. [`ui`]: grid rendering, colors and the line-oriented
//!    [`ui::Console`].
//! 3. [`session`]: the [`session::Session`] loop that ties the two together
//!    and reports how the run ended.
//! 4. [`config`]: command-line flags and presentation settings.

pub mod config;
pub mod machine;
pub mod session;
pub mod ui;
