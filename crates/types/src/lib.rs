//! Shared types module - constants and plain data used across the workspace
//!
//! Everything here is pure data with no external dependencies, so the match
//! engine, the async session, the terminal view, and the input mapper can all
//! agree on the same vocabulary.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval for the terminal loop (~60 FPS) |
//! | `MATCH_DELAY_MS` | 800 | Match animation before a pair is removed |
//! | `MISMATCH_DELAY_MS` | 1000 | Time a mismatched pair stays face-up |
//!
//! # Deck Sizing
//!
//! - `TOKEN_POOL`: 18 built-in emoji, the first 8 form the classic 4x4 game
//! - `DEFAULT_PAIR_COUNT`: 8 pairs (16 cards)
//! - `PAIR_COUNT_STEP`: the pair picker moves in steps of 3
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{CardState, GameAction, DEFAULT_PAIR_COUNT, TOKEN_POOL};
//!
//! assert!(DEFAULT_PAIR_COUNT <= TOKEN_POOL.len());
//! assert!(CardState::Revealed.is_face_up());
//! assert!(GameAction::CursorDown.is_cursor_move());
//! ```

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between a matching second tap and the pair being removed.
pub const MATCH_DELAY_MS: u32 = 800;

/// Delay between a mismatching second tap and the pair flipping back.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Pairs dealt when nothing else is configured (the classic 4x4 grid).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Step used by the pair-count picker (3, 6, 9, ...).
pub const PAIR_COUNT_STEP: usize = 3;

/// Cards per row in the grid layout.
pub const GRID_COLUMNS: usize = 4;

/// Built-in token pool.
///
/// Decks always take a prefix of this list, so the order is part of the game:
/// the first 8 entries are the classic set.
pub const TOKEN_POOL: [&str; 18] = [
    "🐶", "🐱", "🐭", "🐹", "🦊", "🐻", "🐼", "🐨", "🐰", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🦄",
    "🐝", "🦋",
];

/// Per-card state derived from the card facets.
///
/// The lifecycle is `Hidden → Revealed → MatchPending → Matched`, or
/// `Revealed → Hidden` when a pair does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardState {
    /// Face-down and in play.
    Hidden,
    /// Face-up, waiting for a partner or for a mismatch to flip back.
    Revealed,
    /// Part of a found pair, still animating out.
    MatchPending,
    /// Removed from play (rendered invisible).
    Matched,
}

impl CardState {
    /// Derive the state from the three card facets.
    ///
    /// `matched` wins over everything else; a face-down card is hidden
    /// regardless of the animation flag.
    pub fn from_facets(face_up: bool, matched: bool, match_animating: bool) -> Self {
        if matched {
            CardState::Matched
        } else if !face_up {
            CardState::Hidden
        } else if match_animating {
            CardState::MatchPending
        } else {
            CardState::Revealed
        }
    }

    /// Whether a card in this state shows its content.
    pub fn is_face_up(&self) -> bool {
        matches!(self, CardState::Revealed | CardState::MatchPending)
    }

    /// Whether taps on a card in this state can still change anything.
    pub fn is_tappable(&self) -> bool {
        matches!(self, CardState::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::Hidden => "hidden",
            CardState::Revealed => "revealed",
            CardState::MatchPending => "matchPending",
            CardState::Matched => "matched",
        }
    }
}

/// Player intents produced by the input layer.
///
/// Cursor movement is a presentation concern; only `Flip`, `Reset`, and the
/// pair-count changes reach the match engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection cursor one card left
    CursorLeft,
    /// Move the selection cursor one card right
    CursorRight,
    /// Move the selection cursor one row up
    CursorUp,
    /// Move the selection cursor one row down
    CursorDown,
    /// Tap the card under the cursor
    Flip,
    /// Deal a fresh deck with the current pair count
    Reset,
    /// Deal a fresh deck with the next larger pair count
    MorePairs,
    /// Deal a fresh deck with the next smaller pair count
    FewerPairs,
}

impl GameAction {
    /// Whether this action only moves the cursor.
    pub fn is_cursor_move(&self) -> bool {
        matches!(
            self,
            GameAction::CursorLeft
                | GameAction::CursorRight
                | GameAction::CursorUp
                | GameAction::CursorDown
        )
    }
}

/// Next pair count on the picker ladder (3, 6, 9, ...), wrapping to the
/// smallest step after `max`.
///
/// # Examples
///
/// ```
/// use memory_match_types::next_pair_count;
///
/// assert_eq!(next_pair_count(3, 18), 6);
/// assert_eq!(next_pair_count(8, 18), 9);
/// assert_eq!(next_pair_count(18, 18), 3);
/// ```
pub fn next_pair_count(current: usize, max: usize) -> usize {
    let next = (current / PAIR_COUNT_STEP + 1) * PAIR_COUNT_STEP;
    if next > max {
        PAIR_COUNT_STEP.min(max)
    } else {
        next
    }
}

/// Previous pair count on the picker ladder, wrapping to the largest step
/// that fits in `max`.
///
/// # Examples
///
/// ```
/// use memory_match_types::previous_pair_count;
///
/// assert_eq!(previous_pair_count(6, 18), 3);
/// assert_eq!(previous_pair_count(8, 18), 6);
/// assert_eq!(previous_pair_count(3, 18), 18);
/// ```
pub fn previous_pair_count(current: usize, max: usize) -> usize {
    let top = (max / PAIR_COUNT_STEP) * PAIR_COUNT_STEP;
    let prev = if current % PAIR_COUNT_STEP == 0 {
        current.saturating_sub(PAIR_COUNT_STEP)
    } else {
        (current / PAIR_COUNT_STEP) * PAIR_COUNT_STEP
    };
    if prev == 0 {
        top.max(1)
    } else {
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn timing_defaults() {
        assert_eq!(MATCH_DELAY_MS, 800);
        assert_eq!(MISMATCH_DELAY_MS, 1000);
        assert!(MATCH_DELAY_MS > 0 && MISMATCH_DELAY_MS > 0);
    }

    #[test]
    fn token_pool_is_distinct() {
        let unique: HashSet<&str> = TOKEN_POOL.iter().copied().collect();
        assert_eq!(unique.len(), TOKEN_POOL.len());
        assert_eq!(&TOKEN_POOL[..2], &["🐶", "🐱"]);
    }

    #[test]
    fn picker_ladder_covers_whole_pool() {
        let mut seen = Vec::new();
        let mut p = PAIR_COUNT_STEP;
        for _ in 0..TOKEN_POOL.len() / PAIR_COUNT_STEP {
            seen.push(p);
            p = next_pair_count(p, TOKEN_POOL.len());
        }
        assert_eq!(seen, vec![3, 6, 9, 12, 15, 18]);
        assert_eq!(p, 3);
    }

    #[test]
    fn picker_handles_small_pools() {
        assert_eq!(next_pair_count(2, 2), 2);
        assert_eq!(previous_pair_count(2, 2), 1);
    }

    #[test]
    fn facets_map_to_states() {
        assert_eq!(CardState::from_facets(false, false, false), CardState::Hidden);
        assert_eq!(CardState::from_facets(true, false, false), CardState::Revealed);
        assert_eq!(CardState::from_facets(true, false, true), CardState::MatchPending);
        assert_eq!(CardState::from_facets(true, true, false), CardState::Matched);
    }

    #[test]
    fn card_state_predicates() {
        assert!(CardState::Hidden.is_tappable());
        assert!(!CardState::Revealed.is_tappable());
        assert!(!CardState::Matched.is_face_up());
        assert!(CardState::MatchPending.is_face_up());
    }

    #[test]
    fn only_cursor_actions_are_cursor_moves() {
        assert!(GameAction::CursorLeft.is_cursor_move());
        assert!(GameAction::CursorDown.is_cursor_move());
        assert!(!GameAction::Flip.is_cursor_move());
        assert!(!GameAction::MorePairs.is_cursor_move());
    }
}
