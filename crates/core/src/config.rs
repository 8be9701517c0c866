//! Game configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MEMORY_MATCH_PAIRS` | 8 | Pairs per deck |
//! | `MEMORY_MATCH_SEED` | random | Deck shuffle seed |
//! | `MEMORY_MATCH_MATCH_DELAY_MS` | 800 | Match animation delay |
//! | `MEMORY_MATCH_MISMATCH_DELAY_MS` | 1000 | Mismatch flip-back delay |
//! | `MEMORY_MATCH_LOG_PATH` | unset | Log file for the terminal runner |
//!
//! Values that fail to parse fall back to their default with a warning.
//! The pair count is only range-checked when a deck is dealt.

use std::str::FromStr;

use log::warn;

use crate::types::{DEFAULT_PAIR_COUNT, MATCH_DELAY_MS, MISMATCH_DELAY_MS};

pub const ENV_PAIRS: &str = "MEMORY_MATCH_PAIRS";
pub const ENV_SEED: &str = "MEMORY_MATCH_SEED";
pub const ENV_MATCH_DELAY_MS: &str = "MEMORY_MATCH_MATCH_DELAY_MS";
pub const ENV_MISMATCH_DELAY_MS: &str = "MEMORY_MATCH_MISMATCH_DELAY_MS";
pub const ENV_LOG_PATH: &str = "MEMORY_MATCH_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub pair_count: usize,
    pub seed: Option<u64>,
    pub match_delay_ms: u32,
    pub mismatch_delay_ms: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            seed: None,
            match_delay_ms: MATCH_DELAY_MS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let pair_count = parse_or(&lookup, ENV_PAIRS, defaults.pair_count);
        let seed = lookup(ENV_SEED).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("ignoring {}={:?}: not a u64 seed", ENV_SEED, raw);
                None
            }
        });
        // Delays must stay positive so every transition lands after its tap.
        let match_delay_ms = parse_or(&lookup, ENV_MATCH_DELAY_MS, defaults.match_delay_ms).max(1);
        let mismatch_delay_ms =
            parse_or(&lookup, ENV_MISMATCH_DELAY_MS, defaults.mismatch_delay_ms).max(1);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            pair_count,
            seed,
            match_delay_ms,
            mismatch_delay_ms,
            log_path,
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("ignoring {}={:?}: could not parse", key, raw);
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            (ENV_PAIRS, "6"),
            (ENV_SEED, " 42 "),
            (ENV_MATCH_DELAY_MS, "300"),
            (ENV_MISMATCH_DELAY_MS, "450"),
            (ENV_LOG_PATH, "/tmp/memory-match.log"),
        ]));
        assert_eq!(cfg.pair_count, 6);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.match_delay_ms, 300);
        assert_eq!(cfg.mismatch_delay_ms, 450);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/memory-match.log"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            (ENV_PAIRS, "lots"),
            (ENV_SEED, "-1"),
            (ENV_MATCH_DELAY_MS, "soon"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn zero_delays_are_clamped() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            (ENV_MATCH_DELAY_MS, "0"),
            (ENV_MISMATCH_DELAY_MS, "0"),
        ]));
        assert_eq!(cfg.match_delay_ms, 1);
        assert_eq!(cfg.mismatch_delay_ms, 1);
    }
}
