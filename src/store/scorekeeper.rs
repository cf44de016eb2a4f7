//! The scorekeeper: roster plus current game behind one command surface.
//!
//! ## State
//!
//! - `registry`: live roster, mutated by player commands
//! - `game`: `None` until the first game is created, then always `Some`;
//!   each new game replaces the previous one
//! - `log`: accepted commands, in order
//!
//! Mutation takes `&mut self`, so there is exactly one writer at a time.
//! Callers sharing a scorekeeper across threads put it behind one lock.

use im::Vector;
use tracing::{debug, instrument, warn};

use crate::core::{
    Command, CommandRecord, IdGenerator, Outcome, Player, PlayerId, ScoreError, ScoreResult,
    ScorekeeperConfig,
};
use crate::game::GameSession;
use crate::roster::PlayerRegistry;

/// Command dispatcher owning the player registry and the current game.
///
/// ## Example
///
/// ```
/// use scorekeeper::store::Scorekeeper;
///
/// let mut keeper = Scorekeeper::new();
/// let alice = keeper.create_player("Alice");
/// let bob = keeper.create_player("Bob");
///
/// keeper.start_game();
/// keeper.add_score(alice.id, 5).unwrap();
/// keeper.subtract_score(alice.id, 2).unwrap();
///
/// assert_eq!(keeper.score(alice.id).unwrap(), 3);
/// assert_eq!(keeper.score(bob.id).unwrap(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scorekeeper {
    registry: PlayerRegistry,
    game: Option<GameSession>,
    log: Vector<CommandRecord>,
}

impl Scorekeeper {
    /// Create an empty scorekeeper with entropy-seeded ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorekeeper from configuration.
    ///
    /// Players listed in the config are registered in order. Their creation
    /// is not recorded in the command log.
    #[must_use]
    pub fn with_config(config: &ScorekeeperConfig) -> Self {
        let ids = match config.id_seed {
            Some(seed) => IdGenerator::new(seed),
            None => IdGenerator::from_entropy(),
        };
        let mut registry = PlayerRegistry::with_generator(ids);
        for name in &config.players {
            registry.create_player(name.clone());
        }

        debug!(players = registry.len(), seeded = config.id_seed.is_some(), "Created scorekeeper");
        Self {
            registry,
            game: None,
            log: Vector::new(),
        }
    }

    // === Dispatch ===

    /// Apply a command.
    ///
    /// Accepted commands are appended to the command log. Rejected commands
    /// leave state and log untouched.
    #[instrument(skip(self), fields(sequence = self.log.len()))]
    pub fn apply(&mut self, command: Command) -> ScoreResult<Outcome> {
        let result = match &command {
            Command::CreatePlayer { name } => {
                Ok(Outcome::Created(self.registry.create_player(name.clone())))
            }
            Command::EditPlayer(player) => Ok(changed(self.registry.edit_player(player.clone()))),
            Command::DeletePlayer(player) => Ok(changed(self.registry.delete_player(player))),
            Command::CreateGame(roster) => {
                self.game = Some(GameSession::new(roster.iter().cloned()));
                Ok(Outcome::Applied)
            }
            Command::StartGame => {
                self.game = Some(GameSession::new(self.registry.list_players()));
                Ok(Outcome::Applied)
            }
            Command::AddScore { player, amount } => self
                .game_mut()
                .and_then(|game| game.add_score(*player, *amount))
                .map(|()| Outcome::Applied),
            Command::SubtractScore { player, amount } => self
                .game_mut()
                .and_then(|game| game.subtract_score(*player, *amount))
                .map(|()| Outcome::Applied),
        };

        match result {
            Ok(outcome) => {
                self.record(command, outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, ?command, "Command rejected");
                Err(err)
            }
        }
    }

    fn record(&mut self, command: Command, outcome: Outcome) {
        let sequence = self.log.len() as u64;
        debug!(sequence, ?outcome, "Command accepted");
        self.log.push_back(CommandRecord::new(sequence, command, outcome));
    }

    // === Commands ===

    /// Register a new player.
    pub fn create_player(&mut self, name: impl Into<String>) -> Player {
        let name = name.into();
        let player = self.registry.create_player(name.clone());
        self.record(Command::CreatePlayer { name }, Outcome::Created(player.clone()));
        player
    }

    /// Rename a registered player, moving it to the end of the roster.
    ///
    /// Returns `Outcome::Unchanged` if the id is not registered.
    pub fn edit_player(&mut self, updated: Player) -> Outcome {
        self.apply(Command::EditPlayer(updated)).unwrap_or(Outcome::Unchanged)
    }

    /// Remove a registered player.
    ///
    /// Returns `Outcome::Unchanged` if the id is not registered.
    pub fn delete_player(&mut self, target: &Player) -> Outcome {
        self.apply(Command::DeletePlayer(target.clone()))
            .unwrap_or(Outcome::Unchanged)
    }

    /// Start a game from an explicit roster, replacing any current game.
    pub fn create_game(&mut self, roster: impl IntoIterator<Item = Player>) {
        let roster: Vec<Player> = roster.into_iter().collect();
        self.game = Some(GameSession::new(roster.iter().cloned()));
        self.record(Command::CreateGame(roster), Outcome::Applied);
    }

    /// Start a game from the current registry, replacing any current game.
    pub fn start_game(&mut self) {
        self.game = Some(GameSession::new(self.registry.list_players()));
        self.record(Command::StartGame, Outcome::Applied);
    }

    /// Add `amount` to a participant's score.
    pub fn add_score(&mut self, player: PlayerId, amount: u32) -> ScoreResult<()> {
        self.apply(Command::AddScore { player, amount }).map(|_| ())
    }

    /// Subtract `amount` from a participant's score.
    pub fn subtract_score(&mut self, player: PlayerId, amount: u32) -> ScoreResult<()> {
        self.apply(Command::SubtractScore { player, amount }).map(|_| ())
    }

    // === Queries ===

    /// Registered players in roster order.
    #[must_use]
    pub fn list_players(&self) -> Vector<Player> {
        self.registry.list_players()
    }

    /// Current score of a participant.
    pub fn score(&self, player: PlayerId) -> ScoreResult<i64> {
        self.current_game()?.score(player)
    }

    /// Delta history of a participant, oldest first.
    pub fn history(&self, player: PlayerId) -> ScoreResult<&[i64]> {
        self.current_game()?.history(player)
    }

    /// The player registry.
    #[must_use]
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// The current game, if one has been created.
    #[must_use]
    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn command_log(&self) -> &Vector<CommandRecord> {
        &self.log
    }

    fn current_game(&self) -> ScoreResult<&GameSession> {
        self.game.as_ref().ok_or(ScoreError::NoActiveGame)
    }

    fn game_mut(&mut self) -> ScoreResult<&mut GameSession> {
        self.game.as_mut().ok_or(ScoreError::NoActiveGame)
    }
}

fn changed(previous: Option<Player>) -> Outcome {
    match previous {
        Some(_) => Outcome::Applied,
        None => Outcome::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keeper() -> Scorekeeper {
        Scorekeeper::with_config(&ScorekeeperConfig::new().with_id_seed(42))
    }

    #[test]
    fn test_with_config_registers_players() {
        let keeper = Scorekeeper::with_config(
            &ScorekeeperConfig::new().with_id_seed(1).with_players(["A", "B"]),
        );

        let names: Vec<_> = keeper.list_players().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(keeper.command_log().is_empty());
        assert!(keeper.game().is_none());
    }

    #[test]
    fn test_seeded_config_reproducible() {
        let mut k1 = keeper();
        let mut k2 = keeper();

        assert_eq!(k1.create_player("A").id, k2.create_player("A").id);
    }

    #[test]
    fn test_no_game_yet() {
        let mut keeper = keeper();
        let alice = keeper.create_player("Alice");

        assert_eq!(keeper.score(alice.id), Err(ScoreError::NoActiveGame));
        assert_eq!(keeper.history(alice.id), Err(ScoreError::NoActiveGame));
        assert_eq!(keeper.add_score(alice.id, 1), Err(ScoreError::NoActiveGame));
        assert_eq!(keeper.subtract_score(alice.id, 1), Err(ScoreError::NoActiveGame));
    }

    #[test]
    fn test_apply_outcomes() {
        let mut keeper = keeper();

        let alice = match keeper.apply(Command::CreatePlayer { name: "Alice".into() }) {
            Ok(Outcome::Created(p)) => p,
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert_eq!(
            keeper.apply(Command::EditPlayer(alice.renamed("Al"))),
            Ok(Outcome::Applied)
        );
        assert_eq!(keeper.apply(Command::StartGame), Ok(Outcome::Applied));
        assert_eq!(
            keeper.apply(Command::AddScore { player: alice.id, amount: 2 }),
            Ok(Outcome::Applied)
        );
        assert_eq!(keeper.apply(Command::DeletePlayer(alice.clone())), Ok(Outcome::Applied));
        assert_eq!(keeper.apply(Command::DeletePlayer(alice)), Ok(Outcome::Unchanged));
    }

    #[test]
    fn test_command_log_records_accepted_only() {
        let mut keeper = keeper();
        let alice = keeper.create_player("Alice");
        let stranger = PlayerId::from_u128(1);

        keeper.start_game();
        keeper.add_score(alice.id, 3).unwrap();
        assert!(keeper.add_score(stranger, 3).is_err());

        let log: Vec<_> = keeper.command_log().iter().cloned().collect();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].outcome, Outcome::Created(alice.clone()));
        assert_eq!(log[1].command, Command::StartGame);
        assert_eq!(
            log[2],
            CommandRecord::new(
                2,
                Command::AddScore { player: alice.id, amount: 3 },
                Outcome::Applied
            )
        );
    }

    #[test]
    fn test_unknown_edit_delete_unchanged() {
        let mut keeper = keeper();
        keeper.create_player("A");
        let ghost = Player::new(PlayerId::from_u128(77), "Ghost");

        assert_eq!(keeper.edit_player(ghost.clone()), Outcome::Unchanged);
        assert_eq!(keeper.delete_player(&ghost), Outcome::Unchanged);
        assert_eq!(keeper.list_players().len(), 1);
    }

    #[test]
    fn test_rejected_score_leaves_game_unchanged() {
        let mut keeper = keeper();
        let alice = keeper.create_player("Alice");
        keeper.start_game();
        keeper.add_score(alice.id, 4).unwrap();

        let before = keeper.game().cloned();
        let stranger = PlayerId::from_u128(5);
        assert_eq!(
            keeper.subtract_score(stranger, 4),
            Err(ScoreError::PlayerNotInGame(stranger))
        );
        assert_eq!(keeper.game().cloned(), before);
    }
}
