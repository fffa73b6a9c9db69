//! Round engine: turn order, voting window, eliminations and win checks.
//!
//! ## Phases
//!
//! ```text
//! Setup --begin_play--> Active --open_voting--> Voting --eliminate--> Active
//!                                                      \--eliminate--> Ended
//! ```
//!
//! Calls made in the wrong phase are ignored rather than rejected: a
//! presentation layer may deliver a click before it sees the phase
//! change, and such a click must not corrupt the round state.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{PlayerId, Role, Roster};

/// Where the round engine is in its cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Words being revealed, players being named.
    #[default]
    Setup,
    /// Describing words, no vote open.
    Active,
    /// Vote open; the next elimination resolves it.
    Voting,
    /// A side has won.
    Ended,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every undercover has been eliminated.
    CivilianWin,
    /// Undercovers reached parity with (or outnumber) the civilians.
    UndercoverWin,
}

impl Outcome {
    /// Role of the winning side.
    #[must_use]
    pub fn winner(self) -> Role {
        match self {
            Outcome::CivilianWin => Role::Civil,
            Outcome::UndercoverWin => Role::Undercover,
        }
    }
}

/// Decide the game from the number of players still in.
///
/// Civilians win when no undercover remains. Otherwise undercovers win
/// as soon as they are at least as many as the civilians: parity goes to
/// the minority role.
#[must_use]
pub fn evaluate(remaining_undercover: usize, remaining_civil: usize) -> Option<Outcome> {
    if remaining_undercover == 0 {
        Some(Outcome::CivilianWin)
    } else if remaining_undercover >= remaining_civil {
        Some(Outcome::UndercoverWin)
    } else {
        None
    }
}

/// What an accepted elimination did, for the role reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub player: PlayerId,
    /// Role of the eliminated player.
    pub role: Role,
    /// Round in which the vote took place.
    pub round: u32,
    /// Set when this elimination ended the game.
    pub outcome: Option<Outcome>,
}

/// Turn order and elimination bookkeeping for one deal.
///
/// Uses `im` persistent vectors so snapshots are O(1) to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Every seated player, eliminated ones included. Front speaks first.
    order: Vector<PlayerId>,

    /// Eliminated players, in elimination order.
    eliminated: Vector<PlayerId>,

    /// Round counter (starts at 1, +1 per elimination).
    round: u32,

    /// True only while a vote is open.
    voting: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            order: Vector::new(),
            eliminated: Vector::new(),
            round: 1,
            voting: false,
        }
    }
}

impl RoundState {
    /// Fresh state for a deal with the given (already shuffled) order.
    #[must_use]
    pub fn new(order: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            order: order.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn order(&self) -> &Vector<PlayerId> {
        &self.order
    }

    #[must_use]
    pub fn eliminated(&self) -> &Vector<PlayerId> {
        &self.eliminated
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_voting(&self) -> bool {
        self.voting
    }

    #[must_use]
    pub fn is_eliminated(&self, id: PlayerId) -> bool {
        self.eliminated.contains(&id)
    }

    /// Rotate so that the ids after `id` come first, followed by the ids
    /// up to and including `id`. Returns false if `id` is not seated.
    fn rotate_after(&mut self, id: PlayerId) -> bool {
        let Some(idx) = self.order.index_of(&id) else {
            return false;
        };
        let mut rotated = self.order.split_off(idx + 1);
        rotated.append(std::mem::take(&mut self.order));
        self.order = rotated;
        true
    }
}

/// Drives one deal from reveal to the final elimination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEngine {
    state: RoundState,
    phase: Phase,
}

impl RoundEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new deal: install `order`, clear eliminations, round 1, `Setup`.
    pub fn start(&mut self, order: impl IntoIterator<Item = PlayerId>) {
        self.state = RoundState::new(order);
        self.phase = Phase::Setup;
    }

    /// Drop all round data and return to `Setup`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Leave `Setup` once every word has been revealed.
    ///
    /// Goes straight to `Ended` if the deal is already decided. Returns
    /// false (and does nothing) outside `Setup` or before anyone is dealt.
    pub fn begin_play(&mut self, roster: &Roster) -> bool {
        if self.phase != Phase::Setup {
            debug!(phase = ?self.phase, "Ignoring begin_play outside setup");
            return false;
        }
        if roster.is_empty() {
            debug!("Ignoring begin_play before a deal");
            return false;
        }
        self.phase = match self.outcome(roster) {
            Some(_) => Phase::Ended,
            None => Phase::Active,
        };
        true
    }

    /// Open the voting window. Only acts from `Active`.
    pub fn open_voting(&mut self) -> bool {
        if self.phase != Phase::Active {
            debug!(phase = ?self.phase, "Ignoring open_voting");
            return false;
        }
        self.phase = Phase::Voting;
        self.state.voting = true;
        true
    }

    /// Eliminate `id` and close the vote.
    ///
    /// Returns `None` and leaves the state untouched unless a vote is
    /// open and `id` is seated and still in the game.
    pub fn eliminate(&mut self, id: PlayerId, roster: &Roster) -> Option<Elimination> {
        if !self.state.voting {
            debug!(player = %id, phase = ?self.phase, "Ignoring elimination outside vote");
            return None;
        }
        if self.state.is_eliminated(id) {
            debug!(player = %id, "Ignoring elimination of eliminated player");
            return None;
        }
        let Some(role) = roster.role_of(id) else {
            debug!(player = %id, "Ignoring elimination of unknown player");
            return None;
        };
        if !self.state.rotate_after(id) {
            debug!(player = %id, "Ignoring elimination of player not in turn order");
            return None;
        }

        let round = self.state.round;
        self.state.eliminated.push_back(id);
        self.state.round += 1;
        self.state.voting = false;

        let outcome = self.outcome(roster);
        self.phase = if outcome.is_some() { Phase::Ended } else { Phase::Active };

        info!(player = %id, round, ?outcome, "Player eliminated");
        Some(Elimination {
            player: id,
            role,
            round,
            outcome,
        })
    }

    /// Players of `role` still in the game.
    #[must_use]
    pub fn remaining(&self, roster: &Roster, role: Role) -> usize {
        roster
            .iter()
            .filter(|p| p.role == role && !self.state.is_eliminated(p.id))
            .count()
    }

    /// Current win state, if any.
    #[must_use]
    pub fn outcome(&self, roster: &Roster) -> Option<Outcome> {
        evaluate(
            self.remaining(roster, Role::Undercover),
            self.remaining(roster, Role::Civil),
        )
    }

    /// Player at the front of the order, unless they are eliminated.
    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.state
            .order
            .front()
            .copied()
            .filter(|id| !self.state.is_eliminated(*id))
    }

    /// Players still in, in speaking order.
    pub fn alive_in_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.state
            .order
            .iter()
            .copied()
            .filter(move |id| !self.state.is_eliminated(*id))
    }
}
