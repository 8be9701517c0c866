//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and renders into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render wide emoji faces without tearing the grid
//! - Only write cells that changed between frames

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use board_view::{AnchorY, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
