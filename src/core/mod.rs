//! Core types: player identity, id generation, commands, configuration, errors.
//!
//! Everything else in the crate is built from these. They hold no state of
//! their own beyond the id generator's stream position.

pub mod amount;
pub mod command;
pub mod config;
pub mod error;
pub mod id;
pub mod player;

pub use amount::parse_amount;
pub use command::{Command, CommandRecord, Outcome};
pub use config::ScorekeeperConfig;
pub use error::{ScoreError, ScoreResult};
pub use id::IdGenerator;
pub use player::{Player, PlayerId};
