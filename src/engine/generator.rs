//! Deterministic pseudonym generation
//!
//! This module provides the [`PseudonymSource`] trait and its default
//! implementation backed by the `fake` crate. The engine depends only on the
//! trait contract: identical seeds produce identical, effectively unbounded
//! sequences of candidate names across runs and processes.

use fake::faker::name::en::FirstName;
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// A deterministic source of candidate replacement names
///
/// Implementations must advance only internal generator state on each call
/// and must produce the same sequence for the same construction seed.
pub trait PseudonymSource {
    /// Returns the next candidate name in the deterministic sequence
    fn next_name(&mut self) -> String;
}

/// Default pseudonym source producing first-name-like strings
///
/// The string seed is hashed with SHA-256 into the 32-byte seed of a
/// [`StdRng`], so any seed string yields a repeatable sequence. Names are
/// drawn from the `fake` crate's English first-name corpus.
pub struct FirstNameSource {
    rng: StdRng,
}

impl FirstNameSource {
    /// Create a new source keyed by the given seed string
    pub fn new(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut seed_bytes = [0u8; 32];
        seed_bytes.copy_from_slice(&digest);

        Self {
            rng: StdRng::from_seed(seed_bytes),
        }
    }
}

impl PseudonymSource for FirstNameSource {
    fn next_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }
}
