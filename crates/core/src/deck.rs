//! Deck module - paired, shuffled card layouts
//!
//! A deck takes the first `P` tokens of a pool, doubles them, and shuffles the
//! `2P` cards uniformly (Fisher-Yates through `rand`). Decks are never resized:
//! a new game deals a whole new deck.
//!
//! The builder keeps its RNG across deals, so a seeded builder reproduces the
//! same sequence of games.

use std::collections::HashMap;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Card, CardId};
use crate::error::{ConfigProblem, GameError};

/// An ordered sequence of `2P` cards where every token appears exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub(crate) cards: Vec<Card>,
    pair_count: usize,
}

impl Deck {
    /// Build an unshuffled deck from an explicit layout.
    ///
    /// Card ids start at `first_id` and follow layout order. Fails if any
    /// token does not appear exactly twice, or if the layout is empty.
    pub fn from_contents(contents: &[&'static str], first_id: u32) -> Result<Self, GameError> {
        if contents.is_empty() {
            return Err(GameError::pair_count(0, 0));
        }

        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for &token in contents {
            *counts.entry(token).or_insert(0) += 1;
        }
        // Report the first offender in layout order so errors are stable.
        for &token in contents {
            let count = counts[token];
            if count != 2 {
                return Err(GameError::Configuration(ConfigProblem::UnpairedToken {
                    token,
                    count,
                }));
            }
        }

        let cards = contents
            .iter()
            .enumerate()
            .map(|(i, &token)| Card::new(CardId(first_id.wrapping_add(i as u32)), token))
            .collect();

        Ok(Self {
            cards,
            pair_count: contents.len() / 2,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True once every card has reached its final matched state.
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}

/// Deals decks from a fixed token pool.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    pool: &'static [&'static str],
    rng: StdRng,
    seed: u64,
    next_id: u32,
}

impl DeckBuilder {
    /// Create a builder with a deterministic seed.
    pub fn new(pool: &'static [&'static str], seed: u64) -> Self {
        Self {
            pool,
            rng: StdRng::seed_from_u64(seed),
            seed,
            next_id: 0,
        }
    }

    /// Create a builder seeded from the thread RNG.
    ///
    /// The chosen seed is still available through [`DeckBuilder::seed`] so a
    /// game can be replayed.
    pub fn from_entropy(pool: &'static [&'static str]) -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(pool, seed)
    }

    /// Seed this builder was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Largest pair count this builder can deal.
    pub fn max_pairs(&self) -> usize {
        self.pool.len()
    }

    /// Check a pair count against the pool without dealing.
    pub fn validate(&self, pair_count: usize) -> Result<(), GameError> {
        if pair_count == 0 || pair_count > self.pool.len() {
            return Err(GameError::pair_count(pair_count, self.pool.len()));
        }

        let tokens = &self.pool[..pair_count];
        for (i, token) in tokens.iter().enumerate() {
            if tokens[..i].contains(token) {
                return Err(GameError::Configuration(ConfigProblem::DuplicateToken(
                    *token,
                )));
            }
        }
        Ok(())
    }

    /// Deal a new shuffled deck of `pair_count` pairs.
    pub fn build(&mut self, pair_count: usize) -> Result<Deck, GameError> {
        self.validate(pair_count)?;
        Ok(self.deal(pair_count))
    }

    /// Deal without validation. Callers must have validated `pair_count`.
    pub(crate) fn deal(&mut self, pair_count: usize) -> Deck {
        let pair_count = pair_count.min(self.pool.len());
        let tokens = &self.pool[..pair_count];

        let mut contents: Vec<&'static str> = Vec::with_capacity(pair_count * 2);
        contents.extend_from_slice(tokens);
        contents.extend_from_slice(tokens);
        contents.shuffle(&mut self.rng);

        // Ids are assigned after shuffling so they carry no pairing information.
        let first_id = self.next_id;
        self.next_id = self.next_id.wrapping_add(contents.len() as u32);
        let cards = contents
            .into_iter()
            .enumerate()
            .map(|(i, token)| Card::new(CardId(first_id.wrapping_add(i as u32)), token))
            .collect();

        debug!(
            "dealt {} pairs (ids {}..{})",
            pair_count,
            first_id,
            self.next_id
        );

        Deck { cards, pair_count }
    }
}
