//! Contract for records identified solely by a string key
//!
//! A keyed record (a directory entry keyed by phone number, for example) is
//! equal to another exactly when their keys are equal, orders lexicographically
//! by key, and hashes deterministically from the key alone. Other attributes
//! never take part in identity.

use std::cmp::Ordering;

/// Initial value of the polynomial hash accumulator
const HASH_SEED: i32 = 7;

/// Multiplier applied to the accumulator for each code unit
const HASH_MULTIPLIER: i32 = 31;

/// Polynomial hash of a key
///
/// Starts from a small non-zero seed and folds `hash * 31 + unit` over the
/// UTF-16 code units of the key. Overflow wraps in two's complement, so the
/// result is fully defined for keys of any length.
///
/// Equal keys always hash equal; distinct keys only collide with low
/// probability, nothing stronger is promised.
pub fn polynomial_hash(key: &str) -> i32 {
    key.encode_utf16().fold(HASH_SEED, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(unit))
    })
}

/// A record whose identity, hash and ordering derive from one string key
pub trait KeyedRecord {
    /// Returns the identifying key
    fn key(&self) -> &str;

    /// Hash of the key; `key_eq(a, b)` implies `key_hash(a) == key_hash(b)`
    fn key_hash(&self) -> i32 {
        polynomial_hash(self.key())
    }

    /// True iff both records carry the same key
    fn key_eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    /// Lexicographic comparison of keys; `Equal` iff `key_eq`
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}
