//! # undercover-engine
//!
//! Rules engine for "Undercover", a social deduction party game.
//!
//! Players are secretly dealt one of two roles: civilians share a common
//! word, undercovers share a related but different one. Each round the
//! table describes its words, votes, and eliminates one player, until
//! either every undercover is out or the undercovers reach parity.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session**: All mutable state lives in a `GameSession`
//!    owned by the caller. No globals.
//!
//! 2. **Deterministic**: A seed fixes every deal, so games can be
//!    reproduced in tests and replays.
//!
//! 3. **Forgiving Guards**: Out-of-phase calls (eliminating when no vote
//!    is open, unknown ids) are ignored, never errors.
//!
//! ## Modules
//!
//! - `core`: Player ids, roles, roster, RNG, configuration, errors
//! - `words`: Word bank and no-repeat pair selection
//! - `roles`: Role and word assignment
//! - `rules`: Round engine (turn order, voting, eliminations, win checks)
//! - `session`: Composition of the above
//!
//! ## Example
//!
//! ```
//! use undercover_engine::{GameSession, SessionConfig, WordBank};
//!
//! let mut session = GameSession::new(SessionConfig::default(), WordBank::builtin(), 7);
//! session.deal().unwrap();
//! session.begin_play();
//!
//! let undercover = session.players().iter().find(|p| p.role.is_undercover()).unwrap().id;
//! session.open_voting();
//! let elimination = session.eliminate(undercover).unwrap();
//! assert!(session.civilian_win());
//! assert!(elimination.outcome.is_some());
//! ```

pub mod core;
pub mod roles;
pub mod rules;
pub mod session;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, Player, PlayerId, Result, Role, Roster, SessionConfig, UndercoverError,
};

pub use crate::words::{Category, Difficulty, Selection, SelectionHistory, Tier, WordBank, WordGroup, WordPair, WordSelector};

pub use crate::roles::{assign_roles, undercover_count};

pub use crate::rules::{Elimination, Outcome, Phase, RoundEngine, RoundState};

pub use crate::session::GameSession;
