use tracing::debug;

use crate::core::{GameRng, Player, PlayerId, Role, Roster};
use crate::words::WordPair;

/// Number of undercovers for a table of `player_count`.
///
/// One per three players beyond the first, never fewer than one.
///
/// ```
/// use undercover_engine::roles::undercover_count;
///
/// assert_eq!(undercover_count(4), 1);
/// assert_eq!(undercover_count(7), 2);
/// assert_eq!(undercover_count(12), 3);
/// ```
#[must_use]
pub fn undercover_count(player_count: usize) -> usize {
    std::cmp::max(1, player_count.saturating_sub(1) / 3)
}

/// Deal roles and words to `ids`.
///
/// Exactly `undercovers` labels are `Undercover`; labels are shuffled
/// independently of the ids, then zipped with the ids in their given
/// order. `names` supplies pseudonyms to carry over (missing ids get an
/// empty name).
///
/// # Panics
///
/// Panics if `ids` is not `0..n` in order.
pub fn assign_roles(
    ids: &[PlayerId],
    undercovers: usize,
    pair: &WordPair,
    names: impl Fn(PlayerId) -> Option<String>,
    rng: &mut GameRng,
) -> Roster {
    let undercovers = undercovers.min(ids.len());
    let labels: Vec<Role> = (0..ids.len())
        .map(|i| if i < undercovers { Role::Undercover } else { Role::Civil })
        .collect();
    let labels = rng.shuffled(&labels);

    let players = ids
        .iter()
        .zip(labels)
        .map(|(&id, role)| Player {
            id,
            name: names(id).unwrap_or_default(),
            role,
            word: pair.word_for(role).to_string(),
        })
        .collect();

    debug!(players = ids.len(), undercovers, "Assigned roles");
    Roster::new(players)
}
