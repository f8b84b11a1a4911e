//! Terminal presentation.
//!
//! The UI is organized into three layers:
//!
//! - **[`console`]**: prompts, line reads, messages and screen clearing over any
//!   reader/writer pair
//! - **[`render`]**: stateless grid-to-text rendering
//! - **[`theme`]**: centralized color palette used when colors are enabled
//!
//! The entry point for consumers is [`Console`]: construct it with an input,
//! an output and a [`Config`], then hand it to a [`Session`].
//!
//! [`Config`]: crate::config::Config
//! [`Session`]: crate::session::Session

pub mod console;
pub mod render;
pub mod theme;

pub use console::{Console, Tone};
