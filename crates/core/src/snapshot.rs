use serde::Serialize;

use crate::card::{Card, CardId};
use crate::types::CardState;

/// Read-only view of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    pub id: CardId,
    pub content: &'static str,
    pub face_up: bool,
    pub matched: bool,
    pub match_animating: bool,
}

impl CardSnapshot {
    pub fn state(&self) -> CardState {
        CardState::from_facets(self.face_up, self.matched, self.match_animating)
    }
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            content: card.content,
            face_up: card.face_up,
            matched: card.matched,
            match_animating: card.match_animating,
        }
    }
}

/// Ordered view of every card in the live deck.
///
/// Serializes as a bare JSON array of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeckSnapshot {
    pub cards: Vec<CardSnapshot>,
}

impl DeckSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardSnapshot> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardSnapshot> {
        self.cards.iter()
    }

    pub fn count_in(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state() == state).count()
    }

    /// Whether every card is matched. The engine never acts on this; it is
    /// here for callers deciding when to show a win screen.
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, content: &'static str) -> CardSnapshot {
        CardSnapshot::from(&Card::new(CardId(id), content))
    }

    #[test]
    fn json_uses_camel_case_facets() {
        let mut snap = DeckSnapshot::default();
        snap.cards.push(card(0, "🐶"));
        snap.cards[0].face_up = true;
        snap.cards[0].match_animating = true;

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 0,
                "content": "🐶",
                "faceUp": true,
                "matched": false,
                "matchAnimating": true
            }])
        );
    }

    #[test]
    fn all_matched_needs_cards() {
        let mut snap = DeckSnapshot::default();
        assert!(!snap.all_matched());

        snap.cards.push(card(0, "🐶"));
        snap.cards.push(card(1, "🐶"));
        assert!(!snap.all_matched());
        assert_eq!(snap.count_in(CardState::Hidden), 2);

        for c in &mut snap.cards {
            c.face_up = true;
            c.matched = true;
        }
        assert!(snap.all_matched());
        assert_eq!(snap.count_in(CardState::Matched), 2);
    }
}
