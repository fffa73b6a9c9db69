//! Word pair selection without repeats.
//!
//! Each draw picks a category offering the requested difficulty that
//! still has unshown groups, then one of those groups. Once every group
//! of every category at the tier has been shown the history is cleared,
//! so players see the whole tier before any repeat.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bank::{Category, Difficulty, WordBank, WordPair};
use crate::core::error::{Result, UndercoverError};
use crate::core::GameRng;

/// Groups already drawn at the current difficulty, keyed by
/// `(category index, group index)`.
///
/// Only one tier is tracked at a time: switching difficulty starts a
/// fresh history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionHistory {
    difficulty: Option<Difficulty>,
    used: FxHashSet<(usize, usize)>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tier the history currently belongs to.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Number of groups recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn clear(&mut self) {
        self.difficulty = None;
        self.used.clear();
    }

    /// Re-key the history to `difficulty`, dropping groups of another tier.
    fn key_to(&mut self, difficulty: Difficulty) {
        if self.difficulty != Some(difficulty) {
            self.used.clear();
            self.difficulty = Some(difficulty);
        }
    }

    /// Group indices of `0..pool_len` in category `category` not drawn yet.
    fn remaining(&self, category: usize, pool_len: usize) -> Vec<usize> {
        (0..pool_len)
            .filter(|g| !self.used.contains(&(category, *g)))
            .collect()
    }
}

/// Outcome of one draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Name of the category the pair came from.
    pub category: String,
    /// Index of the category inside the bank.
    pub category_index: usize,
    /// Index of the group inside the category's tier.
    pub group_index: usize,
    pub pair: WordPair,
}

/// A category offering the tier, with the groups it has not shown yet.
struct Candidate<'a> {
    index: usize,
    category: &'a Category,
    unused: Vec<usize>,
}

/// Draws word pairs from a bank, remembering what was already shown.
#[derive(Clone, Debug, Default)]
pub struct WordSelector {
    history: SelectionHistory,
}

impl WordSelector {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    /// Forget every drawn group.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    fn candidates<'a>(&self, bank: &'a WordBank, difficulty: Difficulty) -> Vec<Candidate<'a>> {
        bank.categories()
            .iter()
            .enumerate()
            .filter_map(|(index, category)| {
                let pool = category.tier(difficulty)?;
                Some(Candidate {
                    index,
                    category,
                    unused: self.history.remaining(index, pool.words.len()),
                })
            })
            .collect()
    }

    /// Draw a pair at `difficulty`.
    ///
    /// Fails with `EmptyBank` when no category offers the tier. The
    /// majority/minority split is randomized on every draw.
    pub fn select(&mut self, bank: &WordBank, difficulty: Difficulty, rng: &mut GameRng) -> Result<Selection> {
        if bank.categories_with(difficulty).next().is_none() {
            return Err(UndercoverError::EmptyBank { difficulty });
        }

        self.history.key_to(difficulty);
        let mut candidates = self.candidates(bank, difficulty);
        if candidates.iter().all(|c| c.unused.is_empty()) {
            debug!(%difficulty, used = self.history.len(), "Word tier exhausted, resetting history");
            self.history.used.clear();
            candidates = self.candidates(bank, difficulty);
        }
        candidates.retain(|c| !c.unused.is_empty());

        let candidate = rng
            .choose(&candidates)
            .ok_or(UndercoverError::EmptyBank { difficulty })?;
        let group_index = *rng
            .choose(&candidate.unused)
            .ok_or(UndercoverError::EmptyBank { difficulty })?;
        let category = candidate.category;
        let category_index = candidate.index;
        self.history.used.insert((category_index, group_index));

        let pool = match category.tier(difficulty) {
            Some(tier) => &tier.words,
            None => return Err(UndercoverError::EmptyBank { difficulty }),
        };
        let words = rng.shuffled(pool[group_index].words());
        let (majority, minority) = match (words.first(), words.get(1)) {
            (Some(a), Some(b)) if a != b => (a.clone(), b.clone()),
            _ => {
                return Err(UndercoverError::InvalidBank(format!(
                    "group {} of `{}` ({}) needs two distinct words",
                    group_index, category.name, difficulty
                )))
            }
        };

        debug!(
            category = %category.name,
            %difficulty,
            group_index,
            used = self.history.len(),
            "Selected word group"
        );
        trace!(%majority, %minority, "Dealt words");

        Ok(Selection {
            category: category.name.clone(),
            category_index,
            group_index,
            pair: WordPair::new(majority, minority),
        })
    }
}
