//! One table of players, from setup through any number of replays.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info};

use crate::core::{GameRng, Player, PlayerId, Result, Role, Roster, SessionConfig};
use crate::roles::{assign_roles, undercover_count};
use crate::rules::{Elimination, Outcome, Phase, RoundEngine};
use crate::words::{Difficulty, Selection, WordBank, WordPair, WordSelector};

/// A game session: configuration, roster, current deal and round state.
///
/// All mutation goes through the methods below. Randomness comes from
/// three independent streams derived from one seed, so a seeded session
/// replays identically.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    bank: Arc<WordBank>,
    seed: u64,
    word_rng: GameRng,
    role_rng: GameRng,
    order_rng: GameRng,

    num_players: usize,
    undercover_count: usize,
    difficulty: Difficulty,

    selector: WordSelector,
    selection: Option<Selection>,
    roster: Roster,
    engine: RoundEngine,
}

impl GameSession {
    /// Create a session with configuration defaults. Nothing is dealt yet.
    pub fn new(config: SessionConfig, bank: impl Into<Arc<WordBank>>, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let num_players = config.clamp_players(config.default_players);
        let difficulty = config.default_difficulty;

        Self {
            bank: bank.into(),
            seed,
            word_rng: rng.for_context("words"),
            role_rng: rng.for_context("roles"),
            order_rng: rng.for_context("order"),
            num_players,
            undercover_count: undercover_count(num_players),
            difficulty,
            selector: WordSelector::new(),
            selection: None,
            roster: Roster::default(),
            engine: RoundEngine::new(),
            config,
        }
    }

    /// Create a session seeded from the operating system.
    pub fn from_entropy(config: SessionConfig, bank: impl Into<Arc<WordBank>>) -> Self {
        Self::new(config, bank, GameRng::from_entropy().seed())
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }

    #[must_use]
    pub fn undercover_count(&self) -> usize {
        self.undercover_count
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Set the player count for the next deal, clamped into the configured
    /// bounds. Returns the count actually stored.
    pub fn set_num_players(&mut self, count: usize) -> usize {
        self.num_players = self.config.clamp_players(count);
        self.undercover_count = undercover_count(self.num_players);
        debug!(
            requested = count,
            players = self.num_players,
            undercovers = self.undercover_count,
            "Player count set"
        );
        self.num_players
    }

    /// Set the difficulty for the next deal. Changing tier forgets which
    /// groups were already shown.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            self.selector.reset();
            debug!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        }
        self.difficulty = difficulty;
    }

    /// Rename a seated player. Returns false if `id` is not seated.
    pub fn set_player_name(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        match self.roster.get_mut(id) {
            Some(player) => {
                player.name = name.into();
                true
            }
            None => false,
        }
    }

    // === Dealing ===

    /// Seat a fresh roster of `num_players` unnamed players and deal.
    pub fn deal(&mut self) -> Result<()> {
        self.deal_with_names(|_| None)
    }

    /// Deal again to the same table: new words, roles and order, names kept.
    ///
    /// If the player count changed since the last deal the roster is
    /// rebuilt with ids `0..n`, keeping the names of ids that remain.
    pub fn replay(&mut self) -> Result<()> {
        let previous = self.roster.clone();
        self.deal_with_names(|id| previous.get(id).map(|p| p.name.clone()))
    }

    fn deal_with_names(&mut self, names: impl Fn(PlayerId) -> Option<String>) -> Result<()> {
        // Draw first so a bank error leaves the session untouched.
        let selection = self.selector.select(&self.bank, self.difficulty, &mut self.word_rng)?;

        let ids: Vec<PlayerId> = PlayerId::all(self.num_players).collect();
        self.roster = assign_roles(
            &ids,
            self.undercover_count,
            &selection.pair,
            names,
            &mut self.role_rng,
        );
        self.engine.start(self.order_rng.shuffled(&ids));

        info!(
            players = self.num_players,
            undercovers = self.undercover_count,
            difficulty = %self.difficulty,
            category = %selection.category,
            "Dealt new game"
        );
        self.selection = Some(selection);
        Ok(())
    }

    /// Tear everything down to configuration defaults.
    pub fn reset(&mut self) {
        self.num_players = self.config.clamp_players(self.config.default_players);
        self.undercover_count = undercover_count(self.num_players);
        self.difficulty = self.config.default_difficulty;
        self.selector.reset();
        self.selection = None;
        self.roster = Roster::default();
        self.engine.clear();
        info!("Session reset");
    }

    // === Play ===

    /// Finish the word reveal and start describing.
    pub fn begin_play(&mut self) -> bool {
        self.engine.begin_play(&self.roster)
    }

    /// Open the vote.
    ///
    /// Called during the reveal, this first finishes it as `begin_play`
    /// would, so a decided deal ends without a vote. Ignored once the
    /// game is over or before a deal.
    pub fn open_voting(&mut self) -> bool {
        if self.engine.phase() == Phase::Setup && !self.begin_play() {
            return false;
        }
        self.engine.open_voting()
    }

    /// Eliminate a player. Ignored (returns `None`) outside a vote or for
    /// ids that are unknown or already out.
    pub fn eliminate(&mut self, id: PlayerId) -> Option<Elimination> {
        self.engine.eliminate(id, &self.roster)
    }

    // === Queries ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.roster.as_slice()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    /// The word shown to `id` during reveal.
    #[must_use]
    pub fn word_for(&self, id: PlayerId) -> Option<&str> {
        self.roster.get(id).map(|p| p.word.as_str())
    }

    /// Category of the current deal.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.category.as_str())
    }

    /// Majority and minority words of the current deal.
    #[must_use]
    pub fn word_pair(&self) -> Option<&WordPair> {
        self.selection.as_ref().map(|s| &s.pair)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    #[must_use]
    pub fn order(&self) -> &Vector<PlayerId> {
        self.engine.state().order()
    }

    #[must_use]
    pub fn eliminated(&self) -> &Vector<PlayerId> {
        self.engine.state().eliminated()
    }

    #[must_use]
    pub fn is_eliminated(&self, id: PlayerId) -> bool {
        self.engine.state().is_eliminated(id)
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.engine.state().round()
    }

    #[must_use]
    pub fn is_voting(&self) -> bool {
        self.engine.state().is_voting()
    }

    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.engine.current_turn()
    }

    pub fn alive_in_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.engine.alive_in_order()
    }

    #[must_use]
    pub fn remaining_undercover(&self) -> usize {
        self.engine.remaining(&self.roster, Role::Undercover)
    }

    #[must_use]
    pub fn remaining_civil(&self) -> usize {
        self.engine.remaining(&self.roster, Role::Civil)
    }

    /// Win state of the current deal. `None` before any deal.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.roster.is_empty() {
            return None;
        }
        self.engine.outcome(&self.roster)
    }

    #[must_use]
    pub fn civilian_win(&self) -> bool {
        self.outcome() == Some(Outcome::CivilianWin)
    }

    #[must_use]
    pub fn undercover_win(&self) -> bool {
        self.outcome() == Some(Outcome::UndercoverWin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> GameSession {
        GameSession::new(SessionConfig::default(), WordBank::builtin(), seed)
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session(1);
        assert_eq!(s.num_players(), 4);
        assert_eq!(s.undercover_count(), 1);
        assert_eq!(s.difficulty(), Difficulty::Easy);
        assert!(s.players().is_empty());
        assert!(s.word_pair().is_none());
        assert_eq!(s.outcome(), None);
        assert_eq!(s.phase(), Phase::Setup);
    }

    #[test]
    fn test_deal_binds_words() {
        let mut s = session(2);
        s.deal().unwrap();

        let pair = s.word_pair().unwrap().clone();
        assert_eq!(s.players().len(), 4);
        for p in s.players() {
            assert_eq!(s.word_for(p.id), Some(pair.word_for(p.role)));
        }
        assert!(s.selected_category().is_some());
        assert_eq!(s.order().len(), 4);
    }

    #[test]
    fn test_set_num_players_clamps() {
        let mut s = session(3);
        assert_eq!(s.set_num_players(2), 4);
        assert_eq!(s.set_num_players(10), 10);
        assert_eq!(s.undercover_count(), 3);
        assert_eq!(s.set_num_players(99), 12);
    }

    #[test]
    fn test_replay_keeps_names() {
        let mut s = session(4);
        s.deal().unwrap();
        assert!(s.set_player_name(PlayerId::new(1), "Lou"));
        assert!(!s.set_player_name(PlayerId::new(8), "Nobody"));

        s.replay().unwrap();
        assert_eq!(s.player(PlayerId::new(1)).unwrap().name, "Lou");
        assert_eq!(s.player(PlayerId::new(0)).unwrap().display_name(), "Joueur 1");
    }

    #[test]
    fn test_deal_forgets_names() {
        let mut s = session(4);
        s.deal().unwrap();
        s.set_player_name(PlayerId::new(0), "Max");
        s.deal().unwrap();
        assert_eq!(s.player(PlayerId::new(0)).unwrap().name, "");
    }

    #[test]
    fn test_replay_after_resize() {
        let mut s = session(5);
        s.set_num_players(6);
        s.deal().unwrap();
        s.set_player_name(PlayerId::new(5), "Six");
        s.set_player_name(PlayerId::new(2), "Trois");

        s.set_num_players(5);
        s.replay().unwrap();
        assert_eq!(s.players().len(), 5);
        assert_eq!(s.player(PlayerId::new(2)).unwrap().name, "Trois");
        assert!(s.player(PlayerId::new(5)).is_none());
    }

    #[test]
    fn test_set_difficulty_clears_history() {
        let mut s = session(6);
        s.deal().unwrap();
        s.replay().unwrap();
        s.set_difficulty(Difficulty::Hard);
        s.deal().unwrap();
        assert_eq!(s.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut s = session(7);
        s.set_num_players(9);
        s.set_difficulty(Difficulty::Medium);
        s.deal().unwrap();
        s.begin_play();
        s.open_voting();

        s.reset();
        assert_eq!(s.num_players(), 4);
        assert_eq!(s.difficulty(), Difficulty::Easy);
        assert!(s.players().is_empty());
        assert!(s.order().is_empty());
        assert!(s.selected_category().is_none());
        assert!(!s.is_voting());
        assert_eq!(s.round(), 1);
        assert_eq!(s.phase(), Phase::Setup);
    }

    #[test]
    fn test_open_voting_finishes_reveal() {
        let mut s = session(10);
        s.replay().unwrap();
        assert_eq!(s.phase(), Phase::Setup);

        assert!(s.open_voting());
        assert_eq!(s.phase(), Phase::Voting);
        assert!(s.is_voting());
        assert!(!s.begin_play());
    }

    #[test]
    fn test_open_voting_ends_decided_deal() {
        let config = SessionConfig::new().with_player_bounds(2, 12).with_default_players(2);
        let mut s = GameSession::new(config, WordBank::builtin(), 11);
        s.deal().unwrap();

        assert!(!s.open_voting());
        assert_eq!(s.phase(), Phase::Ended);
        assert!(s.undercover_win());
        assert!(!s.is_voting());
    }

    #[test]
    fn test_play_before_deal_is_ignored() {
        let mut s = session(12);
        assert!(!s.begin_play());
        assert!(!s.open_voting());
        assert_eq!(s.phase(), Phase::Setup);
        assert!(!s.is_voting());
        assert!(s.eliminate(PlayerId::new(0)).is_none());
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = session(99);
        let mut b = session(99);
        a.deal().unwrap();
        b.deal().unwrap();
        assert_eq!(a.players(), b.players());
        assert_eq!(a.order(), b.order());
    }
}
