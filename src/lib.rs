//! Memory Match (workspace facade crate).
//!
//! This package re-exports the workspace crates under one name so binaries,
//! integration tests, and benches can use `memory_match::{core,engine,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;
