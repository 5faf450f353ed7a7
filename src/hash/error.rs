use thiserror::Error;

/// Rejected table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("capacity must be a positive number of buckets")]
    ZeroCapacity,
    #[error("load factor must be a positive finite number, got {0}")]
    InvalidLoadFactor(f64),
}

/// Check a `(capacity, load_factor)` pair before any buckets are allocated.
pub(crate) fn validate(capacity: usize, load_factor: f64) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    if !load_factor.is_finite() || load_factor <= 0.0 {
        return Err(ConfigError::InvalidLoadFactor(load_factor));
    }
    Ok(())
}
