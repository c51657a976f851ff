//! # Separate Chaining Hash Table
//!
//! This module implements a **fixed-bucket** hash table that resolves collisions by **separate chaining**,
//! with per-bucket collision diagnostics.
//!
//! - **Generic** key-value pairs (`K: Hash + Eq + Clone, V`).
//! - **Fixed** bucket count chosen at construction (8 by default). The table never resizes or rehashes,
//!   so chains grow with the number of keys that address the same bucket.
//! - **Deterministic** bucket addressing through FNV-1a, so bucket layouts and dumps are reproducible.
//! - **Collision counters**: each bucket counts how many entries it holds beyond the first.
//! - **Key set**: a set mirroring every stored key, answering `contains_key`/`len` without walking chains.
//! - **Dump**: a text report listing every bucket, its counter, and its keys front to back.
//!
//! New keys that land in an occupied bucket are linked at the **front** of its chain, so a chain lists
//! keys newest first.
//!
//! This table is not thread-safe. Wrap it in a mutex if it must be shared.
//!
//! ## Example
//! ```rust
//! use chained::cs::hashing::separate::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new();
//! assert_eq!(table.put("a", 1), None);
//! assert_eq!(table.put("a", 2), Some(1));
//! assert_eq!(table.get(&"a"), Some(&2));
//! assert_eq!(table.len(), 1);
//! ```

use std::borrow::Borrow;
use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};

use log::{debug, trace};

use super::fnv::FnvBuildHasher;
use crate::error::{Error, Result};

/// Bucket count used by `ChainedHashTable::new` and the default builder.
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// A single entry in a chain: `(K, V)`.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A chain holds the entries of one bucket, newest collision at the front.
type Chain<K, V> = VecDeque<Entry<K, V>>;

/// A fixed-bucket separate-chaining hash table.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Chain<K, V>>,
    /// Per-bucket collision counters, always `chain.len() - 1` for a non-empty chain and 0 otherwise.
    collisions: Vec<usize>,
    /// Every key currently stored, mirroring the union of all chains.
    keys: HashSet<K>,
    build_hasher: FnvBuildHasher,
}

/// A builder for the `ChainedHashTable`.
/// Call `.with_buckets(...)`, then `.build()`.
#[derive(Debug, Clone)]
pub struct ChainedHashTableBuilder {
    buckets: usize,
}

impl Default for ChainedHashTableBuilder {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl ChainedHashTableBuilder {
    /// Creates a new builder with the default bucket count.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the number of buckets. It is fixed for the lifetime of the table.
    pub fn with_buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }

    /// Builds the table, rejecting a zero bucket count.
    pub fn build<K: Hash + Eq + Clone, V>(self) -> Result<ChainedHashTable<K, V>> {
        if self.buckets == 0 {
            return Err(Error::ZeroBuckets);
        }
        Ok(ChainedHashTable::with_bucket_count(self.buckets))
    }
}

impl<K, V> ChainedHashTable<K, V> {
    /// Number of buckets. Never changes after construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Collision counter of bucket `index`.
    pub fn collisions(&self, index: usize) -> Result<usize> {
        self.collisions
            .get(index)
            .copied()
            .ok_or(Error::BucketOutOfRange {
                index,
                buckets: self.buckets.len(),
            })
    }

    /// Sum of all bucket collision counters.
    pub fn total_collisions(&self) -> usize {
        self.collisions.iter().sum()
    }

    /// Keys of bucket `index`, front of the chain first.
    pub fn chain_keys(&self, index: usize) -> Result<Vec<&K>> {
        let chain = self.buckets.get(index).ok_or(Error::BucketOutOfRange {
            index,
            buckets: self.buckets.len(),
        })?;
        Ok(chain.iter().map(|entry| &entry.key).collect())
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket, each chain front to back.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| (&entry.key, &entry.value)))
    }

    /// Keys in the same order as `iter`.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Values in the same order as `iter`.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Returns true if any entry holds a value equal to `value`. Scans every chain.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Renders the bucket report. See the `Display` impl for the format.
    pub fn dump(&self) -> String
    where
        K: Display,
    {
        self.to_string()
    }
}

impl<K: Hash + Eq + Clone, V> ChainedHashTable<K, V> {
    /// Creates an empty table with `DEFAULT_BUCKET_COUNT` buckets.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// `bucket_count` must be non-zero; the builder checks it.
    fn with_bucket_count(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, VecDeque::new);

        ChainedHashTable {
            buckets,
            collisions: vec![0; bucket_count],
            keys: HashSet::new(),
            build_hasher: FnvBuildHasher,
        }
    }

    /// Returns the number of key-value pairs in the table.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The index of the bucket `key` addresses.
    pub fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut hasher = self.build_hasher.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is overwritten in place and the old value returned.
    /// Otherwise the entry is linked at the front of its bucket's chain, counting a collision if the
    /// bucket was already occupied, and `None` is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(&key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            trace!("bucket {}: overwriting existing key", index);
            return Some(std::mem::replace(&mut entry.value, value));
        }

        if !chain.is_empty() {
            self.collisions[index] += 1;
            debug!(
                "bucket {}: collision, chain length now {}",
                index,
                chain.len() + 1
            );
        } else {
            trace!("bucket {}: first entry", index);
        }
        self.keys.insert(key.clone());
        chain.push_front(Entry { key, value });
        None
    }

    /// Returns a reference to the value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Removes `key` and returns its value.
    ///
    /// A missing key leaves the table untouched. The bucket's collision counter only drops when the
    /// removed entry shared its chain with at least one other entry.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_of(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|entry| entry.key.borrow() == key)?;

        let shared = chain.len() > 1;
        let entry = chain.remove(position)?;
        if shared {
            self.collisions[index] -= 1;
        }
        self.keys.remove(key);
        debug!(
            "bucket {}: removed entry at position {}, {} left in chain",
            index,
            position,
            chain.len()
        );
        Some(entry.value)
    }

    /// Returns true if `key` is stored. Answered from the key set, without walking the chain.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.keys.contains(key)
    }

    /// The live set of stored keys.
    pub fn key_set(&self) -> &HashSet<K> {
        &self.keys
    }

    /// Removes every entry and resets all collision counters. The bucket count is kept.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.collisions.fill(0);
        self.keys.clear();
        debug!("cleared table with {} buckets", self.buckets.len());
    }
}

impl<K: Hash + Eq + Clone, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for ChainedHashTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for ChainedHashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// One line per bucket, `Index {i}: ({c} conflicts), [{keys}]`, then the collision total.
impl<K: Display, V> Display for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, (chain, conflicts)) in self.buckets.iter().zip(&self.collisions).enumerate() {
            write!(f, "Index {}: ({} conflicts), [", index, conflicts)?;
            for (i, entry) in chain.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", entry.key)?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "Total # of conflicts: {}", self.total_collisions())
    }
}
