//! String-keyed hash tables built on separate chaining.
//!
//! [`hash::chained::ChainedTable`] is the single-threaded table. Wrap it in a
//! [`hash::locked::LockedTable`] to share it between threads.
//!
//! ```
//! use chained_table::hash::prelude::*;
//!
//! let mut table = TableBuilder::new()
//!     .with_capacity(4)
//!     .with_load_factor(0.75)
//!     .build()
//!     .unwrap();
//!
//! table.insert("one", 1);
//! table.insert("two", 2);
//! table.insert("three", 3);
//! assert_eq!(table.capacity(), 4);
//!
//! table.insert("four", 4);
//! assert_eq!(table.capacity(), 8);
//! assert_eq!(table.get("one"), Some(&1));
//! ```
#![no_std]

extern crate alloc;

pub mod hash;
