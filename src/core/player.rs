//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque identifier backed by a UUID. Ids are generated once, when a
//! player is registered, and never change afterwards.
//!
//! ## Player
//!
//! A registered player: id plus a mutable display name. Two players are the
//! same player when their ids match, whatever their names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, globally unique player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Build an id from a raw 128-bit value.
    ///
    /// ```
    /// use scorekeeper::core::PlayerId;
    ///
    /// let a = PlayerId::from_u128(1);
    /// let b = PlayerId::from_u128(1);
    /// assert_eq!(a, b);
    /// assert_ne!(a, PlayerId::from_u128(2));
    /// ```
    #[must_use]
    pub const fn from_u128(raw: u128) -> Self {
        Self(Uuid::from_u128(raw))
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlayerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// A registered player.
///
/// `id` is fixed at creation. `name` is free text: it may be empty and may
/// collide with other players' names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,

    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a player record.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Copy of this player with a different name and the same id.
    ///
    /// ```
    /// use scorekeeper::core::{Player, PlayerId};
    ///
    /// let alice = Player::new(PlayerId::from_u128(7), "Alice");
    /// let renamed = alice.renamed("Alicia");
    /// assert_eq!(renamed.id, alice.id);
    /// assert_eq!(renamed.name, "Alicia");
    /// ```
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
        }
    }

    /// Identity comparison. Names are ignored.
    #[must_use]
    pub fn same_player(&self, other: &Player) -> bool {
        self.id == other.id
    }
}
