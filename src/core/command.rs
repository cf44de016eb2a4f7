//! Command representation for the scorekeeper dispatcher.
//!
//! Every state transition the presentation layer can request is a
//! `Command` variant. The dispatcher matches on it, applies the transition
//! and, when accepted, appends a `CommandRecord` to its log.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};

/// A state transition request.
///
/// ```
/// use scorekeeper::core::{Command, PlayerId};
///
/// let add = Command::AddScore { player: PlayerId::from_u128(1), amount: 5 };
/// assert!(add.is_scoring());
/// assert!(!Command::StartGame.is_scoring());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Register a new player with a freshly generated id.
    CreatePlayer { name: String },

    /// Replace the registered player with the same id.
    EditPlayer(Player),

    /// Remove the registered player with the same id.
    DeletePlayer(Player),

    /// Start a game from an explicit roster.
    CreateGame(Vec<Player>),

    /// Start a game from the current registry.
    StartGame,

    /// Append `+amount` to a participant's history.
    AddScore { player: PlayerId, amount: u32 },

    /// Append `-amount` to a participant's history.
    SubtractScore { player: PlayerId, amount: u32 },
}

impl Command {
    /// Check if this command targets the current game rather than the registry.
    #[must_use]
    pub fn is_scoring(&self) -> bool {
        matches!(
            self,
            Command::AddScore { .. } | Command::SubtractScore { .. }
        )
    }
}

/// What an accepted command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player was registered.
    Created(Player),
    /// State changed.
    Applied,
    /// The command addressed an unknown player; nothing changed.
    Unchanged,
}

/// An accepted command with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Position in the log (starts at 0).
    pub sequence: u64,

    /// The command as issued.
    pub command: Command,

    /// Result of applying it.
    pub outcome: Outcome,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(sequence: u64, command: Command, outcome: Outcome) -> Self {
        Self {
            sequence,
            command,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scoring() {
        let id = PlayerId::from_u128(1);

        assert!(Command::AddScore { player: id, amount: 1 }.is_scoring());
        assert!(Command::SubtractScore { player: id, amount: 1 }.is_scoring());
        assert!(!Command::CreatePlayer { name: "A".into() }.is_scoring());
        assert!(!Command::CreateGame(vec![]).is_scoring());
    }

    #[test]
    fn test_command_serialization() {
        let player = Player::new(PlayerId::from_u128(4), "Dee");
        let command = Command::EditPlayer(player);
        let json = serde_json::to_string(&command).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();

        assert_eq!(command, deserialized);
    }

    #[test]
    fn test_command_record() {
        let record = CommandRecord::new(3, Command::StartGame, Outcome::Applied);

        assert_eq!(record.sequence, 3);
        assert_eq!(record.command, Command::StartGame);
        assert_eq!(record.outcome, Outcome::Applied);
    }
}
