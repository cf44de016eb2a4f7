//! Command/query surface for presentation layers.

pub mod scorekeeper;

pub use scorekeeper::Scorekeeper;
