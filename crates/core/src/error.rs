use std::fmt;

/// Why a deck could not be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProblem {
    /// Pair count is zero or larger than the token pool.
    PairCount { requested: usize, available: usize },
    /// The pool prefix used for a deck repeats a token.
    DuplicateToken(&'static str),
    /// An explicit layout holds a token some number of times other than two.
    UnpairedToken { token: &'static str, count: usize },
}

/// Errors raised by the deck builder and the match engine.
///
/// Both kinds are local precondition violations: nothing is retried and no
/// state is mutated before they are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Configuration(ConfigProblem),
    IndexOutOfRange { index: usize, len: usize },
}

impl GameError {
    pub fn code(self) -> &'static str {
        match self {
            GameError::Configuration(_) => "invalid_configuration",
            GameError::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }

    pub fn pair_count(requested: usize, available: usize) -> Self {
        GameError::Configuration(ConfigProblem::PairCount {
            requested,
            available,
        })
    }
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigProblem::PairCount {
                requested,
                available,
            } => write!(
                f,
                "pair count {requested} is outside 1..={available} for the token pool"
            ),
            ConfigProblem::DuplicateToken(token) => {
                write!(f, "token {token} appears more than once in the pool")
            }
            ConfigProblem::UnpairedToken { token, count } => {
                write!(f, "token {token} appears {count} times, expected 2")
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Configuration(problem) => write!(f, "configuration error: {problem}"),
            GameError::IndexOutOfRange { index, len } => {
                write!(f, "card index {index} out of range for a deck of {len}")
            }
        }
    }
}

impl std::error::Error for GameError {}
