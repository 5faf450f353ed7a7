//! # Chained table
//!
//! A string-keyed hash table with separate chaining. Each bucket is a `Vec`
//! of entries whose keys hash to that bucket's index under the current
//! capacity. Lookups scan one bucket linearly.
//!
//! Growth is eager: after an insertion adds a new key, the table doubles its
//! bucket count once if `len / capacity` exceeds the configured load factor,
//! and rehashes every entry into the new bucket array. The bucket count
//! never shrinks.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::ops::Index;

use crate::hash::error::{ConfigError, validate};
use crate::hash::fold::bucket_index;

pub mod builder;

#[cfg(test)]
mod tests;

/// Bucket count used by [`ChainedTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor used by [`ChainedTable::new`].
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

#[derive(Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

type Bucket<V> = Vec<Entry<V>>;

fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

/// A hash table from `String` keys to values of type `V`.
#[derive(Clone)]
pub struct ChainedTable<V> {
    buckets: Vec<Bucket<V>>,
    len: usize,
    load_factor: f64,
}

impl<V> Default for ChainedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedTable<V> {
    /// Create an empty table with [`DEFAULT_CAPACITY`] buckets and
    /// [`DEFAULT_LOAD_FACTOR`].
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Create an empty table with the given bucket count and load factor.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `capacity` is zero or `load_factor` is not
    /// a positive finite number.
    pub fn with_config(capacity: usize, load_factor: f64) -> Result<Self, ConfigError> {
        validate(capacity, load_factor)?;
        Ok(Self::with_buckets(capacity, load_factor))
    }

    fn with_buckets(capacity: usize, load_factor: f64) -> Self {
        log::trace!("new chained table: capacity={capacity}, load_factor={load_factor}");
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor,
        }
    }

    #[inline]
    fn bucket_for(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Insert a key-value pair.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value is returned. Otherwise the pair is appended to its bucket,
    /// and the table doubles once if the load factor is now exceeded.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let idx = self.bucket_for(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            return Some(core::mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.len += 1;
        if self.should_grow() {
            self.grow();
        }
        None
    }

    /// Get a reference to the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_for(key)]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    /// Get a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.bucket_for(key);
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets[self.bucket_for(key)]
            .iter()
            .any(|e| e.key == key)
    }

    /// Remove `key` and return its value.
    ///
    /// The order of the remaining entries in the bucket is not preserved.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket_for(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|e| e.key == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(pos).value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The configured growth threshold.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// The current ratio of entries to buckets.
    pub fn current_load(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Remove every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        log::trace!("clearing {} entries from {} buckets", self.len, self.capacity());
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    /// Snapshot of the keys, in bucket order.
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| String::from(k)).collect()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|e| (e.key.as_str(), &e.value))
    }

    fn should_grow(&self) -> bool {
        self.current_load() > self.load_factor
    }

    /// Double the bucket count and move every entry to its bucket under the
    /// new capacity. Entries that land in the same new bucket keep their
    /// relative order.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let mut new_buckets = empty_buckets(new_capacity);

        for entry in self.buckets.drain(..).flatten() {
            let idx = bucket_index(&entry.key, new_capacity);
            new_buckets[idx].push(entry);
        }

        self.buckets = new_buckets;
        log::debug!(
            "chained table resized: {old_capacity} -> {new_capacity} buckets, {} entries",
            self.len
        );
    }

    #[cfg(test)]
    pub(crate) fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    #[cfg(test)]
    pub(crate) fn assert_placement(&self) {
        let capacity = self.capacity();
        for (i, bucket) in self.buckets.iter().enumerate() {
            for entry in bucket {
                assert_eq!(
                    bucket_index(&entry.key, capacity),
                    i,
                    "key {:?} stored in the wrong bucket",
                    entry.key
                );
            }
        }
        assert_eq!(self.bucket_lengths().iter().sum::<usize>(), self.len);
    }
}

impl<V: Clone> ChainedTable<V> {
    /// Snapshot of the values, in bucket order.
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Snapshot of the key-value pairs, in bucket order.
    pub fn entries(&self) -> Vec<(String, V)> {
        self.iter()
            .map(|(k, v)| (String::from(k), v.clone()))
            .collect()
    }
}

impl<V: Debug> Debug for ChainedTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Index<&str> for ChainedTable<V> {
    type Output = V;

    /// # Panics
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &V {
        self.get(key).expect("key not found in ChainedTable")
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for ChainedTable<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ChainedTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
