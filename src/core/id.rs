//! Player id generation.
//!
//! ## Key Features
//!
//! - **Unique**: Ids are version-4 UUIDs (122 random bits)
//! - **Seedable**: Same seed produces an identical id sequence
//! - **Entropy-backed**: Unseeded generators draw their seed from the OS
//!
//! ```
//! use scorekeeper::core::IdGenerator;
//!
//! let mut a = IdGenerator::new(42);
//! let mut b = IdGenerator::new(42);
//! assert_eq!(a.next_id(), b.next_id());
//!
//! // Successive ids differ
//! assert_ne!(a.next_id(), a.next_id());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Builder;

use super::player::PlayerId;

/// Source of fresh player ids.
///
/// Uses ChaCha8 as the byte stream; every id is stamped with the UUID v4
/// version and variant bits.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    inner: ChaCha8Rng,
    issued: u64,
}

impl IdGenerator {
    /// Create a deterministic generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            issued: 0,
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            issued: 0,
        }
    }

    /// Generate the next id.
    pub fn next_id(&mut self) -> PlayerId {
        let mut bytes = [0u8; 16];
        self.inner.fill_bytes(&mut bytes);
        self.issued += 1;
        PlayerId::from_uuid(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Number of ids generated so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
