//! Deterministic random sources used to build permutation tables.
//!
//! Noise output must reproduce bit-for-bit for a given seed across runs and
//! platforms, so the permutation shuffle cannot rely on a platform RNG. The
//! [`Random`] trait abstracts any deterministic uniform stream; the crate
//! pins [`LegacyRandom`] as its reference implementation.

pub mod legacy_random;

pub use legacy_random::LegacyRandom;

/// A deterministic seeded source of uniform values.
pub trait Random {
    /// Next uniform value in `[0, 1)`.
    ///
    /// Two instances created from the same seed must produce identical
    /// streams, on every platform.
    fn next_f64(&mut self) -> f64;
}
