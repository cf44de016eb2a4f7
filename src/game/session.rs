//! Game session: score histories for a fixed set of participants.
//!
//! A `GameSession` is built once from a roster snapshot. Its participant set
//! never changes afterwards; only histories grow. Starting a new game
//! replaces the session wholesale.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::GameEntry;
use crate::core::{Player, PlayerId, ScoreError, ScoreResult};

/// Score state for one game.
///
/// ## Example
///
/// ```
/// use scorekeeper::core::{Player, PlayerId};
/// use scorekeeper::game::GameSession;
///
/// let p1 = Player::new(PlayerId::from_u128(1), "A");
/// let p2 = Player::new(PlayerId::from_u128(2), "B");
///
/// let mut game = GameSession::new([p1.clone(), p2]);
/// assert!(game.history(p1.id).unwrap().is_empty());
///
/// game.add_score(p1.id, 5).unwrap();
/// game.subtract_score(p1.id, 2).unwrap();
///
/// assert_eq!(game.history(p1.id).unwrap(), &[5, -2]);
/// assert_eq!(game.score(p1.id).unwrap(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    entries: FxHashMap<PlayerId, GameEntry>,

    /// Ids in the order they first appeared in the roster.
    order: Vec<PlayerId>,
}

impl GameSession {
    /// Build a session from a roster.
    ///
    /// Each player becomes an entry with an empty history. If an id appears
    /// more than once, the last occurrence's name wins and the entry keeps
    /// the position of the first occurrence.
    pub fn new(roster: impl IntoIterator<Item = Player>) -> Self {
        let mut entries = FxHashMap::default();
        let mut order = Vec::new();

        for player in roster {
            let id = player.id;
            if entries.insert(id, GameEntry::new(player)).is_none() {
                order.push(id);
            }
        }

        debug!(participants = order.len(), "Created game session");
        Self { entries, order }
    }

    /// Get the number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the session has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check if a player takes part in this game.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get a participant's entry.
    pub fn entry(&self, id: PlayerId) -> ScoreResult<&GameEntry> {
        self.entries.get(&id).ok_or(ScoreError::PlayerNotInGame(id))
    }

    fn entry_mut(&mut self, id: PlayerId) -> ScoreResult<&mut GameEntry> {
        self.entries
            .get_mut(&id)
            .ok_or(ScoreError::PlayerNotInGame(id))
    }

    /// Iterate over entries in roster order.
    pub fn entries(&self) -> impl Iterator<Item = &GameEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Append `+amount` to a participant's history.
    pub fn add_score(&mut self, id: PlayerId, amount: u32) -> ScoreResult<()> {
        let entry = self.entry_mut(id)?;
        entry.add(amount);
        debug!(player = %id, amount, score = entry.score(), "Added score");
        Ok(())
    }

    /// Append `-amount` to a participant's history.
    pub fn subtract_score(&mut self, id: PlayerId, amount: u32) -> ScoreResult<()> {
        let entry = self.entry_mut(id)?;
        entry.subtract(amount);
        debug!(player = %id, amount, score = entry.score(), "Subtracted score");
        Ok(())
    }

    /// Current score of a participant.
    pub fn score(&self, id: PlayerId) -> ScoreResult<i64> {
        self.entry(id).map(GameEntry::score)
    }

    /// Delta history of a participant, oldest first.
    pub fn history(&self, id: PlayerId) -> ScoreResult<&[i64]> {
        self.entry(id).map(GameEntry::history)
    }

    /// `(id, name, score)` for every participant in roster order.
    pub fn scores(&self) -> impl Iterator<Item = (PlayerId, &str, i64)> {
        self.entries().map(|e| (e.id, e.name.as_str(), e.score()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(raw: u128, name: &str) -> Player {
        Player::new(PlayerId::from_u128(raw), name)
    }

    #[test]
    fn test_new_session() {
        let game = GameSession::new([player(1, "A"), player(2, "B")]);

        assert_eq!(game.len(), 2);
        assert!(game.contains(PlayerId::from_u128(1)));
        assert!(game.contains(PlayerId::from_u128(2)));
        assert_eq!(game.score(PlayerId::from_u128(1)), Ok(0));
        assert_eq!(game.score(PlayerId::from_u128(2)), Ok(0));
    }

    #[test]
    fn test_empty_roster() {
        let game = GameSession::new(Vec::new());

        assert!(game.is_empty());
        assert_eq!(game.entries().count(), 0);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let game = GameSession::new([player(1, "A"), player(1, "B")]);

        assert_eq!(game.len(), 1);
        assert_eq!(game.entry(PlayerId::from_u128(1)).unwrap().name, "B");
    }

    #[test]
    fn test_duplicate_id_keeps_first_position() {
        let game = GameSession::new([player(1, "A"), player(2, "B"), player(1, "C")]);

        let names: Vec<_> = game.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["C", "B"]);
    }

    #[test]
    fn test_add_and_subtract() {
        let id = PlayerId::from_u128(1);
        let mut game = GameSession::new([player(1, "A")]);

        game.add_score(id, 10).unwrap();
        game.subtract_score(id, 4).unwrap();
        game.add_score(id, 1).unwrap();

        assert_eq!(game.history(id).unwrap(), &[10, -4, 1]);
        assert_eq!(game.score(id), Ok(7));
    }

    #[test]
    fn test_histories_are_independent() {
        let a = PlayerId::from_u128(1);
        let b = PlayerId::from_u128(2);
        let mut game = GameSession::new([player(1, "A"), player(2, "B")]);

        game.add_score(a, 3).unwrap();

        assert_eq!(game.score(a), Ok(3));
        assert_eq!(game.score(b), Ok(0));
        assert!(game.history(b).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_player_not_found() {
        let stranger = PlayerId::from_u128(9);
        let mut game = GameSession::new([player(1, "A")]);
        let before = game.clone();

        assert_eq!(game.add_score(stranger, 1), Err(ScoreError::PlayerNotInGame(stranger)));
        assert_eq!(
            game.subtract_score(stranger, 1),
            Err(ScoreError::PlayerNotInGame(stranger))
        );
        assert_eq!(game.score(stranger), Err(ScoreError::PlayerNotInGame(stranger)));
        assert_eq!(game.history(stranger), Err(ScoreError::PlayerNotInGame(stranger)));

        assert_eq!(game, before);
    }

    #[test]
    fn test_scores_in_roster_order() {
        let mut game = GameSession::new([player(2, "B"), player(1, "A")]);
        game.add_score(PlayerId::from_u128(1), 4).unwrap();

        let scores: Vec<_> = game.scores().collect();
        assert_eq!(
            scores,
            vec![(PlayerId::from_u128(2), "B", 0), (PlayerId::from_u128(1), "A", 4)]
        );
    }
}
