//! End-to-end match engine scenarios through the facade crate.

use memory_match::core::{
    CardState, ConfigProblem, DeckBuilder, GameConfig, GameError, MatchEngine, TapOutcome,
    TOKEN_POOL,
};

static PETS: [&str; 2] = ["🐶", "🐱"];

fn engine_with(pool: &'static [&'static str], pairs: usize, seed: u64) -> MatchEngine {
    MatchEngine::with_builder(DeckBuilder::new(pool, seed), pairs, 800, 1000).unwrap()
}

fn partner_of(engine: &MatchEngine, index: usize) -> usize {
    let content = engine.deck().cards()[index].content;
    (0..engine.len())
        .find(|&j| j != index && engine.deck().cards()[j].content == content)
        .unwrap()
}

fn stranger_of(engine: &MatchEngine, index: usize) -> usize {
    let content = engine.deck().cards()[index].content;
    (0..engine.len())
        .find(|&j| engine.deck().cards()[j].content != content)
        .unwrap()
}

#[test]
fn config_defaults_deal_classic_deck() {
    let engine = MatchEngine::new(&GameConfig {
        seed: Some(99),
        ..GameConfig::default()
    })
    .unwrap();
    assert_eq!(engine.len(), 16);
    assert_eq!(engine.seed(), 99);

    let mut contents: Vec<_> = engine.deck().cards().iter().map(|c| c.content).collect();
    contents.sort_unstable();
    contents.dedup();
    let mut classic = TOKEN_POOL[..8].to_vec();
    classic.sort_unstable();
    assert_eq!(contents, classic);
}

#[test]
fn same_seed_replays_same_games() {
    let mut a = engine_with(&TOKEN_POOL, 8, 4242);
    let mut b = engine_with(&TOKEN_POOL, 8, 4242);
    assert_eq!(a.snapshot(), b.snapshot());

    a.reset();
    b.reset();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn two_pet_deck_has_two_of_each() {
    let engine = engine_with(&PETS, 2, 1);
    let snap = engine.snapshot();
    assert_eq!(snap.len(), 4);
    for pet in PETS {
        assert_eq!(snap.iter().filter(|c| c.content == pet).count(), 2);
    }
    assert_eq!(snap.count_in(CardState::Hidden), 4);
}

#[test]
fn mismatch_then_retry_then_match() {
    let mut engine = engine_with(&TOKEN_POOL, 4, 8);
    let a = 0;
    let wrong = stranger_of(&engine, a);
    let right = partner_of(&engine, a);

    engine.tap(a).unwrap();
    assert!(matches!(engine.tap(wrong).unwrap(), TapOutcome::Mismatched(_)));
    engine.tick(1000);
    assert_eq!(engine.card_state(a).unwrap(), CardState::Hidden);
    assert_eq!(engine.card_state(wrong).unwrap(), CardState::Hidden);

    engine.tap(a).unwrap();
    assert!(matches!(engine.tap(right).unwrap(), TapOutcome::Matched(_)));
    engine.tick(800);
    assert_eq!(engine.card_state(a).unwrap(), CardState::Matched);
    assert_eq!(engine.card_state(right).unwrap(), CardState::Matched);
}

#[test]
fn match_and_mismatch_overlap() {
    let mut engine = engine_with(&TOKEN_POOL, 8, 3);
    let a = 0;
    let b = partner_of(&engine, a);
    engine.tap(a).unwrap();
    engine.tap(b).unwrap();

    // Start a mismatching pair 300ms into the match delay.
    engine.tick(300);
    let c = (0..engine.len())
        .find(|&i| engine.card_state(i).unwrap() == CardState::Hidden)
        .unwrap();
    let d = (0..engine.len())
        .find(|&i| {
            engine.card_state(i).unwrap() == CardState::Hidden
                && engine.deck().cards()[i].content != engine.deck().cards()[c].content
        })
        .unwrap();
    engine.tap(c).unwrap();
    engine.tap(d).unwrap();
    assert_eq!(engine.pending_transitions(), 2);

    // Match lands at 800, mismatch at 1300.
    engine.tick(500);
    assert_eq!(engine.card_state(a).unwrap(), CardState::Matched);
    assert_eq!(engine.card_state(c).unwrap(), CardState::Revealed);

    engine.tick(500);
    assert_eq!(engine.card_state(c).unwrap(), CardState::Hidden);
    assert_eq!(engine.card_state(d).unwrap(), CardState::Hidden);
    assert_eq!(engine.pending_transitions(), 0);
}

#[test]
fn reset_mid_match_keeps_new_deck_clean() {
    let mut engine = engine_with(&TOKEN_POOL, 8, 21);
    let a = 0;
    let b = partner_of(&engine, a);
    engine.tap(a).unwrap();
    engine.tap(b).unwrap();

    engine.reset();
    engine.tick(800);
    let snap = engine.snapshot();
    assert_eq!(snap.count_in(CardState::Hidden), 16);
    assert_eq!(snap.count_in(CardState::Matched), 0);
}

#[test]
fn every_deal_gets_fresh_ids() {
    let mut engine = engine_with(&TOKEN_POOL, 3, 5);
    let first: Vec<_> = engine.snapshot().iter().map(|c| c.id).collect();
    engine.reset();
    let second: Vec<_> = engine.snapshot().iter().map(|c| c.id).collect();
    assert!(first.iter().all(|id| !second.contains(id)));
}

#[test]
fn error_codes() {
    let mut engine = engine_with(&TOKEN_POOL, 3, 5);
    let err = engine.tap(100).unwrap_err();
    assert_eq!(err.code(), "index_out_of_range");

    let err = engine.new_game(0).unwrap_err();
    assert_eq!(err.code(), "invalid_configuration");
    assert_eq!(
        err,
        GameError::Configuration(ConfigProblem::PairCount {
            requested: 0,
            available: 18
        })
    );
}

#[test]
fn snapshot_into_reuses_buffer() {
    let mut engine = engine_with(&TOKEN_POOL, 8, 5);
    let mut snap = engine.snapshot();
    engine.new_game(3).unwrap();
    engine.snapshot_into(&mut snap);
    assert_eq!(snap.len(), 6);
    assert_eq!(snap, engine.snapshot());
}
