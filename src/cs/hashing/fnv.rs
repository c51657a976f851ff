//! # FNV-1a Bucket Hasher
//!
//! The chained table addresses buckets with a fixed, **deterministic** hash so that the same key lands
//! in the same bucket in every process and every run. `std`'s `RandomState` is seeded per instance,
//! which would make bucket layouts (and therefore collision counters and dumps) unreproducible.
//!
//! FNV-1a (64-bit) is simple and fast, and it is not cryptographically secure. Keys chosen by an
//! adversary can all be steered into one bucket.
//!
//! ## Key Features
//! - Implements `std::hash::Hasher`, so any `K: Hash` can be fed through it.
//! - `FnvBuildHasher` is a zero-sized `BuildHasher` that always starts from the same offset basis.

use std::hash::{BuildHasher, Hasher};

/// Offset basis and prime for 64-bit FNV.
const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// A `Hasher` running 64-bit FNV-1a over every byte written to it.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// Creates a hasher at the FNV-1a offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV64_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            // FNV-1a: xor first, then multiply
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(FNV64_PRIME);
        }
    }
}

/// The `BuildHasher` the chained table uses for bucket addressing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}

/// Returns a 64-bit FNV-1a hash of `data`.
pub fn fnv64a_hash(data: &[u8]) -> u64 {
    let mut hasher = FnvHasher::new();
    hasher.write(data);
    hasher.finish()
}
