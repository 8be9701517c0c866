//! Engine module - runtime hosting for the match engine
//!
//! [`memory_match_core::MatchEngine`] is synchronous and clock-free. This crate
//! hosts it on a tokio runtime so async callers can play a game without
//! driving the clock themselves:
//!
//! - [`GameSession::spawn`] moves an engine into its own task
//! - `tap`, `reset`, and `new_game` return the resulting snapshot
//! - [`GameSession::subscribe`] yields a watch receiver that also sees delayed
//!   transitions as they fire
//!
//! The terminal runner does not use this crate; it ticks the engine from its
//! own frame loop.

pub mod session;

pub use session::{GameSession, SessionError};
