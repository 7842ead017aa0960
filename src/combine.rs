//! Combining hashable values into a running seed.
//!
//! Digests come from the standard [`DefaultHasher`] unless the caller
//! supplies a [`BuildHasher`] explicitly via the `*_with` variants.

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::mix::mix;

/// Computes the 64-bit hash of a value using the standard hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Computes the 64-bit hash of a value with a caller-supplied hasher.
#[must_use]
pub fn hash_one_with<S, T>(build: &S, value: &T) -> u64
where
    S: BuildHasher,
    T: Hash + ?Sized,
{
    let mut hasher = build.build_hasher();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Folds the hash of one value into `seed`.
#[inline]
pub fn combine<T: Hash + ?Sized>(seed: &mut u64, value: &T) {
    *seed = mix(*seed, hash_one(value));
}

/// Same as [`combine`], with the digest drawn from `build` instead of
/// the standard hasher.
#[inline]
pub fn combine_with<S, T>(build: &S, seed: &mut u64, value: &T)
where
    S: BuildHasher,
    T: Hash + ?Sized,
{
    *seed = mix(*seed, hash_one_with(build, value));
}

/// Folds every value of an ordered sequence into `seed`, left to right.
///
/// Equivalent to one [`combine`] call per element on the same seed.
/// For heterogeneous values, see [`combine_many`](crate::combine_many).
pub fn combine_all<'a, T, I>(seed: &mut u64, values: I)
where
    T: Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for value in values {
        combine(seed, value);
    }
}
