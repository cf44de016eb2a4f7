//! Player registry: the live, ordered roster.
//!
//! The `PlayerRegistry` owns every registered player and the generator that
//! issues their ids. Insertion order is display order.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{IdGenerator, Player, PlayerId};

/// Ordered roster of registered players.
///
/// No two entries share an id: ids are only issued by the registry's own
/// generator, and edits replace the entry with the matching id.
///
/// ## Example
///
/// ```
/// use scorekeeper::roster::PlayerRegistry;
///
/// let mut registry = PlayerRegistry::with_seed(1);
///
/// let alice = registry.create_player("Alice");
/// let bob = registry.create_player("Bob");
///
/// registry.edit_player(alice.renamed("Alicia"));
///
/// // Edited players move to the end of the roster
/// let names: Vec<_> = registry.players().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Bob", "Alicia"]);
///
/// registry.delete_player(&bob);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vector<Player>,

    #[serde(skip)]
    ids: IdGenerator,
}

impl PlayerRegistry {
    /// Create an empty registry with entropy-seeded ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with deterministic ids.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(IdGenerator::new(seed))
    }

    /// Create an empty registry drawing ids from `ids`.
    #[must_use]
    pub fn with_generator(ids: IdGenerator) -> Self {
        Self {
            players: Vector::new(),
            ids,
        }
    }

    /// Register a new player at the end of the roster.
    ///
    /// Any name is accepted, including empty and duplicate names.
    pub fn create_player(&mut self, name: impl Into<String>) -> Player {
        let player = Player::new(self.ids.next_id(), name);
        debug!(id = %player.id, name = %player.name, "Registered player");
        self.players.push_back(player.clone());
        player
    }

    /// Replace the entry with `updated.id`, moving it to the end of the roster.
    ///
    /// Returns the previous entry, or `None` (registry unchanged) if no
    /// player has that id.
    pub fn edit_player(&mut self, updated: Player) -> Option<Player> {
        let previous = self.remove(updated.id)?;
        debug!(id = %updated.id, from = %previous.name, to = %updated.name, "Edited player");
        self.players.push_back(updated);
        Some(previous)
    }

    /// Remove the entry whose id matches `target.id`.
    ///
    /// Returns the removed entry, or `None` if it was already absent.
    pub fn delete_player(&mut self, target: &Player) -> Option<Player> {
        let removed = self.remove(target.id)?;
        debug!(id = %removed.id, name = %removed.name, "Deleted player");
        Some(removed)
    }

    fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Get a registered player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over players in roster order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Snapshot of the roster in order.
    ///
    /// O(1): the returned vector shares structure with the registry and is
    /// unaffected by later mutations.
    #[must_use]
    pub fn list_players(&self) -> Vector<Player> {
        self.players.clone()
    }
}
