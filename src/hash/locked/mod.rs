//! A [`ChainedTable`] shared between threads behind a single lock.
//!
//! Every operation, reads included, takes the same exclusive spin lock and
//! holds it until the operation returns. A resize triggered by an insert
//! therefore runs entirely under the lock and is never observed half done.

use alloc::string::String;
use alloc::vec::Vec;

use crossbeam_utils::CachePadded;
use spin::Mutex;

use crate::hash::chained::ChainedTable;


/// A thread-safe wrapper around [`ChainedTable`].
pub struct LockedTable<V> {
    table: CachePadded<Mutex<ChainedTable<V>>>,
}

impl<V> Default for LockedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<ChainedTable<V>> for LockedTable<V> {
    fn from(table: ChainedTable<V>) -> Self {
        Self {
            table: CachePadded::new(Mutex::new(table)),
        }
    }
}

impl<V> LockedTable<V> {
    /// Create an empty locked table with the default configuration.
    pub fn new() -> Self {
        Self::from(ChainedTable::new())
    }

    /// Insert a key-value pair, returning the previous value if any.
    pub fn insert(&self, key: impl Into<String>, value: V) -> Option<V> {
        self.table.lock().insert(key, value)
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.table.lock().remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.lock().contains_key(key)
    }

    /// Read the value under `key` while holding the lock.
    ///
    /// The closure runs under the lock and should return quickly.
    ///
    /// # Returns
    /// * `Some(R)` - the closure's result if the key exists
    /// * `None` - if the key does not exist
    pub fn view<F, R>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.table.lock().get(key).map(f)
    }

    /// Modify the value under `key` in place while holding the lock.
    ///
    /// # Returns
    /// * `Some(R)` - the closure's result if the key exists
    /// * `None` - if the key does not exist
    pub fn alter<F, R>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        self.table.lock().get_mut(key).map(f)
    }

    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.lock().capacity()
    }

    pub fn clear(&self) {
        self.table.lock().clear();
    }

    pub fn keys(&self) -> Vec<String> {
        self.table.lock().keys()
    }

    /// Take the table back out of the lock.
    pub fn into_inner(self) -> ChainedTable<V> {
        CachePadded::into_inner(self.table).into_inner()
    }
}

impl<V: Clone> LockedTable<V> {
    /// Get a copy of the value under `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        self.view(key, V::clone)
    }

    pub fn values(&self) -> Vec<V> {
        self.table.lock().values()
    }

    pub fn entries(&self) -> Vec<(String, V)> {
        self.table.lock().entries()
    }
}
