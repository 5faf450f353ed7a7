pub mod chained;
pub mod error;
pub mod fold;
pub mod locked;

pub mod prelude {
    pub use super::chained::{ChainedTable, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
    pub use super::chained::builder::TableBuilder;
    pub use super::error::ConfigError;
    pub use super::fold::{bucket_index, fold_hash};
    pub use super::locked::LockedTable;
}
