use serde::Serialize;

use crate::types::CardState;

/// Card identity, unique among decks dealt by the same builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

/// A single card: its pair key plus the three facets the view renders from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub content: &'static str,
    pub face_up: bool,
    pub matched: bool,
    /// Set while a found pair animates out, cleared once it is matched.
    pub match_animating: bool,
}

impl Card {
    /// Create a face-down card.
    pub fn new(id: CardId, content: &'static str) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
            match_animating: false,
        }
    }

    pub fn state(&self) -> CardState {
        CardState::from_facets(self.face_up, self.matched, self.match_animating)
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn begin_match(&mut self) {
        self.match_animating = true;
    }

    /// `MatchPending -> Matched`. Returns false if the card was not pending.
    pub(crate) fn finish_match(&mut self) -> bool {
        if self.state() != CardState::MatchPending {
            return false;
        }
        self.matched = true;
        self.match_animating = false;
        true
    }

    /// `Revealed -> Hidden`. Returns false for any other state.
    pub(crate) fn conceal(&mut self) -> bool {
        if self.state() != CardState::Revealed {
            return false;
        }
        self.face_up = false;
        true
    }
}
