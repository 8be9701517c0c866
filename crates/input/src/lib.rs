//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and tracks the grid cursor that
//! turns cursor actions into a card index for the match engine.

pub mod cursor;
pub mod map;

pub use memory_match_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
