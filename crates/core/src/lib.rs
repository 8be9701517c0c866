//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the memory-matching game: dealing decks,
//! resolving taps into matches and mismatches, and firing the delayed
//! transitions that finish or undo a pair. It has **no dependencies** on
//! terminals, async runtimes, or wall clocks, which makes it:
//!
//! - **Deterministic**: the same seed deals the same sequence of decks
//! - **Testable**: time is a number passed to [`MatchEngine::tick`]
//! - **Portable**: the terminal runner and the async session both drive it
//!
//! # Module Structure
//!
//! - [`card`]: a single card and its three facets
//! - [`deck`]: paired, shuffled decks and the seeded [`DeckBuilder`]
//! - [`engine`]: the [`MatchEngine`] state machine
//! - [`timeline`]: generation-tagged delayed transitions on the engine clock
//! - [`snapshot`]: read-only [`DeckSnapshot`] for renderers and observers
//! - [`config`]: [`GameConfig`] loaded from environment variables
//! - [`error`]: [`GameError`] for configuration and index failures
//!
//! # Game Rules
//!
//! - A deck of `P` pairs takes the first `P` tokens of the pool, doubles them,
//!   and shuffles uniformly
//! - Tapping a face-down card turns it face-up; the first of a pair becomes
//!   the selection
//! - A second tap that matches marks both cards as animating and, 800ms later,
//!   matched
//! - A second tap that does not match leaves both face-up for 1000ms, then
//!   flips them back
//! - Taps on face-up or matched cards are ignored
//! - Resetting deals a new deck; transitions scheduled for the old deck never
//!   touch the new one
//!
//! # Example
//!
//! ```
//! use memory_match_core::{CardState, DeckBuilder, MatchEngine, TapOutcome, TOKEN_POOL};
//!
//! let builder = DeckBuilder::new(&TOKEN_POOL, 12345);
//! let mut engine = MatchEngine::with_builder(builder, 8, 800, 1000).unwrap();
//! assert_eq!(engine.len(), 16);
//!
//! assert_eq!(engine.tap(0).unwrap(), TapOutcome::Revealed);
//! assert_eq!(engine.selection(), Some(0));
//!
//! // Advancing the clock fires whatever the second tap scheduled.
//! engine.tap(1).unwrap();
//! engine.tick(1000);
//! assert_ne!(engine.card_state(0).unwrap(), CardState::Revealed);
//! ```

pub mod card;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod timeline;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use card::{Card, CardId};
pub use config::GameConfig;
pub use deck::{Deck, DeckBuilder};
pub use engine::{MatchEngine, TapOutcome};
pub use error::{ConfigProblem, GameError};
pub use snapshot::{CardSnapshot, DeckSnapshot};
pub use timeline::{Timeline, Transition, TransitionKind};
pub use types::{CardState, GameAction, TOKEN_POOL};
