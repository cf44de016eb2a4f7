//! Per-participant game state.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// One participant of a game.
///
/// `name` is copied from the registry when the game starts and is not
/// updated afterwards. `history` only ever grows; the score is always the
/// sum of it and is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Participant id.
    pub id: PlayerId,

    /// Name at snapshot time.
    pub name: String,

    history: Vec<i64>,
}

impl GameEntry {
    /// Create an entry with an empty history.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            history: Vec::new(),
        }
    }

    /// Current score: the sum of all deltas, 0 when there are none.
    ///
    /// ```
    /// use scorekeeper::core::{Player, PlayerId};
    /// use scorekeeper::game::GameEntry;
    ///
    /// let mut entry = GameEntry::new(Player::new(PlayerId::from_u128(1), "A"));
    /// assert_eq!(entry.score(), 0);
    ///
    /// entry.add(5);
    /// entry.subtract(2);
    /// assert_eq!(entry.history(), &[5, -2]);
    /// assert_eq!(entry.score(), 3);
    /// ```
    #[must_use]
    pub fn score(&self) -> i64 {
        self.history.iter().sum()
    }

    /// Signed deltas in the order they were recorded.
    #[must_use]
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Record `+amount`.
    pub fn add(&mut self, amount: u32) {
        self.history.push(i64::from(amount));
    }

    /// Record `-amount`.
    pub fn subtract(&mut self, amount: u32) {
        self.history.push(-i64::from(amount));
    }
}
