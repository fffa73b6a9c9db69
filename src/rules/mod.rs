//! Round rules: turn order rotation, voting, eliminations and win checks.
//!
//! The engine owns a `RoundState` per deal and reads roles from the
//! session's `Roster`; it never deals roles itself.

pub mod engine;

pub use engine::{evaluate, Elimination, Outcome, Phase, RoundEngine, RoundState};
