use crate::hash::error::ConfigError;
use crate::hash::locked::LockedTable;

use super::{ChainedTable, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};

/// Builder for [`ChainedTable`] and [`LockedTable`].
///
/// Parameters are checked once, in [`TableBuilder::build`].
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder {
    capacity: usize,
    load_factor: f64,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Create a builder with the default capacity and load factor.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Set the initial number of buckets. Must be positive.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the ratio of entries to buckets above which the table doubles.
    /// Must be positive and finite.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Build an empty [`ChainedTable`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the capacity or load factor is invalid.
    pub fn build<V>(self) -> Result<ChainedTable<V>, ConfigError> {
        ChainedTable::with_config(self.capacity, self.load_factor)
    }

    /// Build an empty [`LockedTable`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the capacity or load factor is invalid.
    pub fn build_locked<V>(self) -> Result<LockedTable<V>, ConfigError> {
        self.build().map(LockedTable::from)
    }
}
