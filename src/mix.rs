//! The raw mixing step.
//!
//! `mix(seed, h) = seed XOR (h + φ + (seed << 6) + (seed >> 2))` over
//! wrapping `u64` arithmetic. The golden-ratio constant spreads digests
//! across the word; the two shifts inject bit-position diffusion between
//! rounds. Shift amounts are fixed.

/// Mixing constant (64-bit golden ratio): `⌊2⁶⁴ / φ⌋`, odd.
pub const GOLDEN_RATIO: u64 = 0x9E37_79B9_7F4A_7C15;

/// Folds a raw 64-bit digest into `seed` and returns the new seed.
///
/// Not commutative across positions: the shift terms depend on the
/// incoming seed, so `mix(mix(s, a), b)` and `mix(mix(s, b), a)` differ
/// in general. Overflow wraps; it is part of the mixing, never an error.
#[inline]
#[must_use]
pub const fn mix(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}
