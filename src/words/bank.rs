//! Word bank: categories of difficulty-tiered synonym groups.
//!
//! The bank is immutable data. Each category offers one or more
//! difficulty tiers; each tier holds an ordered list of groups, and each
//! group lists two or more related words from which a deal draws its
//! majority and minority words.
//!
//! ## JSON Format
//!
//! ```json
//! [
//!   {
//!     "category": "Animaux",
//!     "difficulties": [
//!       { "difficulty": "facile", "words": [ { "pairs": ["chat", "chien"] } ] }
//!     ]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{Result, UndercoverError};

/// Difficulty tier of a word group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    #[serde(rename = "facile", alias = "easy")]
    Easy,
    #[serde(rename = "moyen", alias = "medium")]
    Medium,
    #[serde(rename = "hard")]
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Name used in bank files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "facile",
            Difficulty::Medium => "moyen",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of two or more related words.
///
/// SmallVec keeps the common 2-4 word group off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    pub pairs: SmallVec<[String; 4]>,
}

impl WordGroup {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pairs: words.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.pairs
    }

    /// Number of distinct words in the group.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        let mut seen: SmallVec<[&str; 4]> = SmallVec::new();
        for word in &self.pairs {
            if !seen.contains(&word.as_str()) {
                seen.push(word.as_str());
            }
        }
        seen.len()
    }
}

/// The two words of one deal: the common word and the undercover word.
///
/// The two words are never equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    majority: String,
    minority: String,
}

impl WordPair {
    pub fn new(majority: impl Into<String>, minority: impl Into<String>) -> Self {
        let majority = majority.into();
        let minority = minority.into();
        debug_assert_ne!(majority, minority, "Word pair must hold two distinct words");
        Self { majority, minority }
    }

    /// Word dealt to civil players.
    #[must_use]
    pub fn majority(&self) -> &str {
        &self.majority
    }

    /// Word dealt to undercover players.
    #[must_use]
    pub fn minority(&self) -> &str {
        &self.minority
    }

    /// Word matching a role.
    #[must_use]
    pub fn word_for(&self, role: crate::core::Role) -> &str {
        if role.is_undercover() {
            &self.minority
        } else {
            &self.majority
        }
    }
}

/// One difficulty tier of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub difficulty: Difficulty,
    pub words: Vec<WordGroup>,
}

/// A named theme offering one or more tiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: String,
    pub difficulties: Vec<Tier>,
}

impl Category {
    /// First tier matching `difficulty` that has at least one group.
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> Option<&Tier> {
        self.difficulties
            .iter()
            .find(|t| t.difficulty == difficulty && !t.words.is_empty())
    }
}

/// Immutable catalogue of categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    /// Wrap already-built categories. No validation is performed.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse and validate a bank in the JSON format above.
    pub fn from_json(json: &str) -> Result<Self> {
        let bank: WordBank = serde_json::from_str(json)?;
        bank.validate()?;
        Ok(bank)
    }

    /// The catalogue shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, tiers)| Category {
                name: (*name).to_string(),
                difficulties: tiers
                    .iter()
                    .map(|(difficulty, groups)| Tier {
                        difficulty: *difficulty,
                        words: groups.iter().map(|g| WordGroup::new(g.iter().copied())).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories offering a non-empty tier for `difficulty`, in bank order.
    pub fn categories_with(&self, difficulty: Difficulty) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.tier(difficulty).is_some())
    }

    /// Check that every group holds at least two distinct words.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(UndercoverError::InvalidBank("bank has no categories".into()));
        }
        for category in &self.categories {
            for tier in &category.difficulties {
                for (idx, group) in tier.words.iter().enumerate() {
                    if group.distinct_len() < 2 {
                        return Err(UndercoverError::InvalidBank(format!(
                            "group {} of `{}` ({}) needs two distinct words",
                            idx, category.name, tier.difficulty
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

type BuiltinCategory = (&'static str, &'static [(Difficulty, &'static [&'static [&'static str]])]);

const BUILTIN: &[BuiltinCategory] = &[
    (
        "Animaux",
        &[
            (Difficulty::Easy, &[&["chat", "chien"], &["lion", "tigre"], &["vache", "mouton", "chèvre"]]),
            (Difficulty::Medium, &[&["dauphin", "requin"], &["aigle", "faucon"], &["crapaud", "grenouille"]]),
            (Difficulty::Hard, &[&["alpaga", "lama"], &["guépard", "léopard", "jaguar"], &["corbeau", "corneille"]]),
        ],
    ),
    (
        "Transports",
        &[
            (Difficulty::Easy, &[&["voiture", "camion"], &["vélo", "trottinette"], &["train", "métro"]]),
            (Difficulty::Medium, &[&["avion", "hélicoptère"], &["bateau", "sous-marin"], &["bus", "tramway"]]),
            (Difficulty::Hard, &[&["péniche", "ferry"], &["planeur", "montgolfière"]]),
        ],
    ),
    (
        "Nature",
        &[
            (Difficulty::Easy, &[&["soleil", "lune"], &["mer", "lac"], &["montagne", "colline"]]),
            (Difficulty::Medium, &[&["forêt", "jungle"], &["orage", "tempête", "ouragan"], &["neige", "grêle"]]),
            (Difficulty::Hard, &[&["falaise", "ravin"], &["estuaire", "delta"]]),
        ],
    ),
    (
        "Cuisine",
        &[
            (Difficulty::Easy, &[&["thé", "café"], &["pizza", "burger"], &["pomme", "poire"]]),
            (Difficulty::Medium, &[&["crêpe", "gaufre"], &["beurre", "margarine"], &["sushi", "maki"]]),
            (Difficulty::Hard, &[&["cannelle", "muscade"], &["raclette", "fondue", "tartiflette"]]),
        ],
    ),
    (
        "Couleurs",
        &[
            (Difficulty::Easy, &[&["rouge", "bleu"], &["noir", "blanc"]]),
            (Difficulty::Medium, &[&["turquoise", "cyan"], &["bordeaux", "grenat"]]),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = WordBank::builtin();
        assert!(bank.validate().is_ok());
        for difficulty in Difficulty::ALL {
            assert!(bank.categories_with(difficulty).count() > 0);
        }
    }

    #[test]
    fn test_categories_with_skips_missing_tier() {
        let bank = WordBank::builtin();
        let hard: Vec<_> = bank.categories_with(Difficulty::Hard).map(|c| c.name.as_str()).collect();
        assert!(!hard.contains(&"Couleurs"));
        assert!(hard.contains(&"Animaux"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "category": "Sports", "difficulties": [
                { "difficulty": "facile", "words": [ { "pairs": ["foot", "rugby"] } ] },
                { "difficulty": "medium", "words": [ { "pairs": ["tennis", "padel", "squash"] } ] }
            ] }
        ]"#;
        let bank = WordBank::from_json(json).unwrap();
        let sports = &bank.categories()[0];
        assert_eq!(sports.name, "Sports");
        assert_eq!(sports.tier(Difficulty::Easy).unwrap().words[0].words(), ["foot", "rugby"]);
        assert_eq!(sports.tier(Difficulty::Medium).unwrap().words[0].distinct_len(), 3);
        assert!(sports.tier(Difficulty::Hard).is_none());
    }

    #[test]
    fn test_from_json_rejects_single_word_group() {
        let json = r#"[{ "category": "X", "difficulties": [
            { "difficulty": "hard", "words": [ { "pairs": ["seul", "seul"] } ] }
        ] }]"#;
        let err = WordBank::from_json(json).unwrap_err();
        assert!(matches!(err, UndercoverError::InvalidBank(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = WordBank::from_json("{ not json").unwrap_err();
        assert!(matches!(err, UndercoverError::MalformedBank(_)));
    }

    #[test]
    fn test_empty_tier_does_not_match() {
        let bank = WordBank::new(vec![Category {
            name: "Vide".into(),
            difficulties: vec![Tier {
                difficulty: Difficulty::Easy,
                words: vec![],
            }],
        }]);
        assert_eq!(bank.categories_with(Difficulty::Easy).count(), 0);
    }

    #[test]
    fn test_word_pair_for_role() {
        let pair = WordPair::new("chat", "chien");
        assert_eq!(pair.word_for(Role::Civil), "chat");
        assert_eq!(pair.word_for(Role::Undercover), "chien");
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Medium.to_string(), "moyen");
        let d: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"facile\"");
    }
}
