//! Game session: composes word selection, role assignment and the round
//! engine into one replayable table.
//!
//! ## Flow
//!
//! 1. Configure: `set_num_players`, `set_difficulty`
//! 2. Deal: `deal` (fresh table) or `replay` (same table, names kept)
//! 3. Reveal: each player reads `word_for(id)`, then `begin_play`
//! 4. Rounds: `open_voting` then `eliminate(id)` until `outcome` is set
//! 5. `replay` or `reset`

mod game;

pub use game::GameSession;
