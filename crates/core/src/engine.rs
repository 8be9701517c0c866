//! Match engine - turn resolution and delayed card transitions
//!
//! The engine owns the live deck, the pending selection, and a timeline of
//! delayed transitions. Hosts drive it with two calls:
//!
//! - [`MatchEngine::tap`] for each player tap
//! - [`MatchEngine::tick`] with elapsed milliseconds, which fires transitions
//!   that have come due
//!
//! Every deck replacement bumps the generation. Transitions scheduled under an
//! older generation are discarded when they come due, so a reset never sees
//! leftovers from the previous deck.

use log::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::deck::{Deck, DeckBuilder};
use crate::error::GameError;
use crate::snapshot::{CardSnapshot, DeckSnapshot};
use crate::timeline::{Timeline, Transition, TransitionKind};
use crate::types::{CardState, TOKEN_POOL};

/// Result of a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The card was already face-up or matched.
    Ignored,
    /// First card of a pair turned face-up and is now the selection.
    Revealed,
    /// Second card matched the selection; the pair finishes later.
    Matched(Transition),
    /// Second card differed from the selection; both flip back later.
    Mismatched(Transition),
}

impl TapOutcome {
    /// Whether the tap changed any card.
    pub fn changed(&self) -> bool {
        !matches!(self, TapOutcome::Ignored)
    }
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    builder: DeckBuilder,
    deck: Deck,
    selection: Option<usize>,
    /// Incremented on every deck replacement.
    generation: u32,
    timeline: Timeline,
    match_delay_ms: u32,
    mismatch_delay_ms: u32,
}

impl MatchEngine {
    /// Create an engine over the built-in pool and deal the first deck.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let builder = match config.seed {
            Some(seed) => DeckBuilder::new(&TOKEN_POOL, seed),
            None => DeckBuilder::from_entropy(&TOKEN_POOL),
        };
        Self::with_builder(
            builder,
            config.pair_count,
            config.match_delay_ms,
            config.mismatch_delay_ms,
        )
    }

    /// Create an engine with a custom builder (pool and seed).
    pub fn with_builder(
        mut builder: DeckBuilder,
        pair_count: usize,
        match_delay_ms: u32,
        mismatch_delay_ms: u32,
    ) -> Result<Self, GameError> {
        let deck = builder.build(pair_count)?;
        let match_delay_ms = match_delay_ms.max(1);
        let mismatch_delay_ms = mismatch_delay_ms.max(1);
        info!(
            "new engine: {} pairs, seed {}, delays {}ms/{}ms",
            pair_count,
            builder.seed(),
            match_delay_ms,
            mismatch_delay_ms
        );
        Ok(Self {
            builder,
            deck,
            selection: None,
            generation: 0,
            timeline: Timeline::new(),
            match_delay_ms,
            mismatch_delay_ms,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    pub fn max_pairs(&self) -> usize {
        self.builder.max_pairs()
    }

    pub fn seed(&self) -> u64 {
        self.builder.seed()
    }

    /// Index of the face-up card waiting for its partner, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Engine clock in milliseconds (sum of all `tick` calls).
    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms()
    }

    /// Scheduled transitions not yet fired, including stale ones from
    /// previous generations that will be discarded when due.
    pub fn pending_transitions(&self) -> usize {
        self.timeline.len()
    }

    /// Milliseconds until the next scheduled transition, if any.
    pub fn ms_until_next_transition(&self) -> Option<u64> {
        self.timeline.ms_until_next()
    }

    pub fn card_state(&self, index: usize) -> Result<CardState, GameError> {
        self.deck
            .get(index)
            .map(|c| c.state())
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.deck.len(),
            })
    }

    pub fn snapshot_into(&self, out: &mut DeckSnapshot) {
        out.clear();
        out.cards
            .extend(self.deck.cards().iter().map(CardSnapshot::from));
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        let mut s = DeckSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Deal a new deck with `pair_count` pairs.
    ///
    /// On error the current deck, selection, and generation are untouched.
    pub fn new_game(&mut self, pair_count: usize) -> Result<DeckSnapshot, GameError> {
        let deck = self.builder.build(pair_count)?;
        self.replace_deck(deck);
        Ok(self.snapshot())
    }

    /// Deal a new deck with the current pair count.
    pub fn reset(&mut self) -> DeckSnapshot {
        // The live pair count was validated when its deck was dealt.
        let deck = self.builder.deal(self.deck.pair_count());
        self.replace_deck(deck);
        self.snapshot()
    }

    fn replace_deck(&mut self, deck: Deck) {
        self.generation = self.generation.wrapping_add(1);
        self.deck = deck;
        self.selection = None;
        info!(
            "dealt generation {} with {} pairs ({} transitions left to expire)",
            self.generation,
            self.deck.pair_count(),
            self.timeline.len()
        );
    }

    /// Apply a tap on the card at `index`.
    ///
    /// Taps on face-up or matched cards are ignored. The second tap of a pair
    /// always clears the selection immediately, so the next pair can start
    /// while the previous one is still waiting on its transition.
    pub fn tap(&mut self, index: usize) -> Result<TapOutcome, GameError> {
        let len = self.deck.len();
        let card = self
            .deck
            .get(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;

        if !card.state().is_tappable() {
            trace!("tap {} ignored: card is {}", index, card.state().as_str());
            return Ok(TapOutcome::Ignored);
        }

        let outcome = match self.selection {
            Some(previous) if previous != index => {
                self.deck.cards[index].reveal();
                self.selection = None;
                self.resolve_pair(previous, index)
            }
            _ => {
                self.deck.cards[index].reveal();
                self.selection = Some(index);
                debug!("tap {}: revealed {}", index, self.deck.cards[index].content);
                TapOutcome::Revealed
            }
        };

        debug_assert!(self.selection_is_consistent());
        Ok(outcome)
    }

    fn resolve_pair(&mut self, previous: usize, index: usize) -> TapOutcome {
        let is_match = self.deck.cards[previous].content == self.deck.cards[index].content;
        let kind = if is_match {
            TransitionKind::Finish
        } else {
            TransitionKind::Conceal
        };
        let transition = Transition {
            kind,
            first: previous,
            second: index,
            generation: self.generation,
        };

        if is_match {
            self.deck.cards[previous].begin_match();
            self.deck.cards[index].begin_match();
            let due = self.timeline.schedule(self.match_delay_ms, transition);
            debug!(
                "tap {}: matched {} with card {}, finishing at {}ms",
                index, self.deck.cards[index].content, previous, due
            );
            TapOutcome::Matched(transition)
        } else {
            let due = self.timeline.schedule(self.mismatch_delay_ms, transition);
            debug!(
                "tap {}: {} does not match card {}, concealing at {}ms",
                index, self.deck.cards[index].content, previous, due
            );
            TapOutcome::Mismatched(transition)
        }
    }

    /// Advance the engine clock and fire every transition that came due.
    ///
    /// Returns true if any card changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.timeline.advance(elapsed_ms);

        let mut changed = false;
        while let Some(transition) = self.timeline.pop_due() {
            changed |= self.apply(transition);
        }
        changed
    }

    fn apply(&mut self, transition: Transition) -> bool {
        if transition.generation != self.generation {
            debug!(
                "dropping {:?} for cards {} and {}: generation {} is stale (live {})",
                transition.kind,
                transition.first,
                transition.second,
                transition.generation,
                self.generation
            );
            return false;
        }

        let len = self.deck.len();
        if transition.first >= len || transition.second >= len {
            warn!(
                "dropping {:?}: cards {} and {} outside deck of {}",
                transition.kind, transition.first, transition.second, len
            );
            return false;
        }

        let mut changed = false;
        for index in [transition.first, transition.second] {
            let card = &mut self.deck.cards[index];
            changed |= match transition.kind {
                TransitionKind::Finish => card.finish_match(),
                TransitionKind::Conceal => card.conceal(),
            };
        }

        debug!(
            "{:?} cards {} and {} at {}ms",
            transition.kind,
            transition.first,
            transition.second,
            self.timeline.now_ms()
        );
        changed
    }

    /// The selection, if any, must point at a `Revealed` card.
    pub fn selection_is_consistent(&self) -> bool {
        match self.selection {
            None => true,
            Some(i) => self
                .deck
                .get(i)
                .is_some_and(|c| c.state() == CardState::Revealed),
        }
    }
}
