//! Word bank and word pair selection.
//!
//! - `bank`: immutable catalogue of categories and difficulty tiers
//! - `selector`: no-repeat draws with exhaustion reset

pub mod bank;
pub mod selector;

pub use bank::{Category, Difficulty, Tier, WordBank, WordGroup, WordPair};
pub use selector::{Selection, SelectionHistory, WordSelector};
