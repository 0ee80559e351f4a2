//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Whether an
//! action has any effect is decided by the controller, not here.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
