//! Core types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the word, role and round
//! modules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{SessionConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{Result, UndercoverError};
pub use player::{Player, PlayerId, Role, Roster};
pub use rng::{GameRng, GameRngState};
