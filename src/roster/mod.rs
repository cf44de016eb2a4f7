//! Player roster management.
//!
//! The registry is independent of any game: starting a game copies the
//! roster, after which edits here no longer reach that game.

pub mod registry;

pub use registry::PlayerRegistry;
