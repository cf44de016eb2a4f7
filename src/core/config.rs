//! Scorekeeper configuration.
//!
//! Hosts configure the engine at startup with a `ScorekeeperConfig`:
//! - `id_seed`: deterministic player ids (replays, tests)
//! - `players`: names registered before the first command

use serde::{Deserialize, Serialize};

/// Startup configuration for a `Scorekeeper`.
///
/// ```
/// use scorekeeper::core::ScorekeeperConfig;
///
/// let config = ScorekeeperConfig::new()
///     .with_id_seed(42)
///     .with_player("Alice")
///     .with_player("Bob");
///
/// assert_eq!(config.id_seed, Some(42));
/// assert_eq!(config.players, vec!["Alice", "Bob"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorekeeperConfig {
    /// Seed for player id generation. `None` draws from OS entropy.
    pub id_seed: Option<u64>,

    /// Names registered, in order, when the scorekeeper is created.
    pub players: Vec<String>,
}

impl ScorekeeperConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate player ids deterministically from `seed`.
    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }

    /// Register a player at startup.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Register several players at startup.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }
}
