//! Games: participants and their score histories.
//!
//! ## Key Types
//!
//! - `GameEntry`: One participant's name snapshot and delta history
//! - `GameSession`: All participants of one game, keyed by player id

pub mod entry;
pub mod session;

pub use entry::GameEntry;
pub use session::GameSession;
