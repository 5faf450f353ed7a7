//! The string hash used to place keys into buckets.
//!
//! Every character contributes its Unicode scalar value to a polynomial fold
//! with multiplier 31. The accumulator is a `u64` that wraps on overflow, so
//! long keys never produce a negative or out-of-range intermediate and the
//! final reduction is a plain unsigned modulo.

const MULTIPLIER: u64 = 31;

/// Fold `key` into a 64-bit hash code.
///
/// `h = h * 31 + code(c)` for each character `c`, starting from zero, with
/// wrapping arithmetic.
#[inline]
pub fn fold_hash(key: &str) -> u64 {
    key.chars().fold(0u64, |h, c| {
        h.wrapping_mul(MULTIPLIER).wrapping_add(u64::from(u32::from(c)))
    })
}

/// Reduce the hash of `key` into `[0, capacity)`.
///
/// The same function serves lookups and rehashing, so an entry's bucket can
/// be recomputed at any capacity.
#[inline]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity must be positive");
    (fold_hash(key) % capacity as u64) as usize
}
