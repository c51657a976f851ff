//! Hash-based collections.
//!
//! - `separate`: fixed-bucket hash table with separate chaining and collision counters
//! - `fnv`: the deterministic FNV-1a hasher used for bucket addressing

pub mod fnv;
pub mod separate;

pub use fnv::{fnv64a_hash, FnvBuildHasher, FnvHasher};
pub use separate::{ChainedHashTable, ChainedHashTableBuilder, DEFAULT_BUCKET_COUNT};
