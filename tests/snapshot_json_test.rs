//! Snapshot JSON shape, as seen by an outside consumer.

use serde::Deserialize;

use memory_match::core::{CardState, DeckBuilder, MatchEngine, TOKEN_POOL};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CardJson {
    id: u32,
    content: String,
    face_up: bool,
    matched: bool,
    match_animating: bool,
}

fn engine() -> MatchEngine {
    MatchEngine::with_builder(DeckBuilder::new(&TOKEN_POOL, 77), 3, 800, 1000).unwrap()
}

#[test]
fn snapshot_is_an_array_of_cards() {
    let engine = engine();
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let cards: Vec<CardJson> = serde_json::from_str(&json).unwrap();

    assert_eq!(cards.len(), 6);
    for (card, live) in cards.iter().zip(engine.deck().cards()) {
        assert_eq!(card.id, live.id.0);
        assert_eq!(card.content, live.content);
        assert!(!card.face_up && !card.matched && !card.match_animating);
    }
}

#[test]
fn snapshot_json_tracks_match_pending() {
    let mut engine = engine();
    let content = engine.deck().cards()[0].content;
    let partner = (1..engine.len())
        .find(|&j| engine.deck().cards()[j].content == content)
        .unwrap();
    engine.tap(0).unwrap();
    engine.tap(partner).unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.count_in(CardState::MatchPending), 2);

    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value[0]["faceUp"], true);
    assert_eq!(value[0]["matchAnimating"], true);
    assert_eq!(value[partner]["matched"], false);

    engine.tick(800);
    let value = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(value[0]["matched"], true);
    assert_eq!(value[0]["matchAnimating"], false);
}
