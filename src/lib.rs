//! # scorekeeper
//!
//! Player roster and game state engine for multiplayer scorekeeping.
//!
//! ## Design Principles
//!
//! 1. **Derived Scores**: A score is the sum of a participant's delta
//!    history. It is never stored.
//!
//! 2. **Snapshot Games**: Starting a game copies the roster. Later roster
//!    edits do not reach the running game.
//!
//! 3. **Explicit State**: No process-wide store. Callers own a
//!    `Scorekeeper` (or the registry and session separately) and drive it
//!    with direct methods or `Command` values.
//!
//! ## Modules
//!
//! - `core`: Player ids, id generation, commands, configuration, errors
//! - `roster`: The ordered player registry
//! - `game`: Game entries and sessions
//! - `store`: The `Scorekeeper` command/query surface
//!
//! ## Example
//!
//! ```
//! use scorekeeper::{Command, ScoreError, Scorekeeper, ScorekeeperConfig};
//!
//! let config = ScorekeeperConfig::new().with_id_seed(7).with_players(["A", "B"]);
//! let mut keeper = Scorekeeper::with_config(&config);
//! let players = keeper.list_players();
//!
//! keeper.apply(Command::StartGame).unwrap();
//! keeper.apply(Command::AddScore { player: players[0].id, amount: 10 }).unwrap();
//!
//! assert_eq!(keeper.score(players[0].id), Ok(10));
//!
//! // Players registered after the game started are not part of it
//! let late = keeper.create_player("C");
//! assert_eq!(keeper.score(late.id), Err(ScoreError::PlayerNotInGame(late.id)));
//! ```

pub mod core;
pub mod game;
pub mod roster;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    parse_amount, Command, CommandRecord, IdGenerator, Outcome, Player, PlayerId, ScoreError,
    ScoreResult, ScorekeeperConfig,
};

pub use crate::game::{GameEntry, GameSession};

pub use crate::roster::PlayerRegistry;

pub use crate::store::Scorekeeper;
