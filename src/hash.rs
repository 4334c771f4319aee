//! Home-index computation shared by both table variants.
//!
//! A key is folded over its UTF-16 code units with `h = h * 229 + code`
//! in wrapping 32-bit signed arithmetic, then reduced into `[0, capacity)`
//! with a sign-correct remainder.

use crate::error::TableError;

/// Multiplier used when folding a key. Fixed; not a tunable.
pub const HASH_MULTIPLIER: i32 = 229;

/// Prime capacity used by the `new()` constructors.
pub const DEFAULT_CAPACITY: usize = 12553;

/// Largest accepted capacity. Home indices are reduced from an `i32` fold.
pub const MAX_CAPACITY: usize = i32::MAX as usize;

/// Fold `key` into a 32-bit signed value. Overflow wraps.
#[inline]
pub fn fold(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |h, code| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(code))
    })
}

/// Home index of `key` in a table of `capacity` slots.
///
/// Negative folds map to `capacity - |rem|`, never to `|rem|`.
///
/// # Panics
///
/// Panics if `capacity` is zero or greater than [`MAX_CAPACITY`]; the
/// table constructors reject both with a `TableError` instead.
#[inline]
pub fn home_index(key: &str, capacity: usize) -> usize {
    assert!(
        capacity > 0 && capacity <= MAX_CAPACITY,
        "capacity {} outside 1..={}",
        capacity,
        MAX_CAPACITY
    );
    i64::from(fold(key)).rem_euclid(capacity as i64) as usize
}

/// Construction-time precondition shared by both tables.
pub(crate) fn validate_capacity(capacity: usize) -> Result<usize, TableError> {
    if capacity == 0 {
        return Err(TableError::ZeroCapacity);
    }
    if capacity > MAX_CAPACITY {
        return Err(TableError::CapacityTooLarge {
            requested: capacity,
            max: MAX_CAPACITY,
        });
    }
    Ok(capacity)
}
