//! 48-bit linear congruential generator (the `java.util.Random` algorithm).

use crate::random::Random;

/// Multiplier of the 48-bit LCG.
const MULTIPLIER: i64 = 0x5DEECE66D;
/// Increment of the 48-bit LCG.
const INCREMENT: i64 = 0xB;
/// The state is 48 bits wide.
const MASK: i64 = (1 << 48) - 1;

/// Deterministic 48-bit LCG matching `java.util.Random`.
///
/// Pinned as the crate's reference generator: the algorithm is fully
/// specified, so the same seed yields the same permutation table in any
/// implementation that follows it. Any `i64` seed is valid.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    state: i64,
}

impl LegacyRandom {
    /// Create a generator from a seed.
    #[must_use]
    pub const fn from_seed(seed: i64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return the top `bits` bits (`bits <= 48`).
    fn next_bits(&mut self, bits: u32) -> i64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        self.state >> (48 - bits)
    }
}

impl Random for LegacyRandom {
    /// Combine a 26-bit and a 27-bit draw into a 53-bit mantissa in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        let hi = self.next_bits(26) << 27;
        let lo = self.next_bits(27);
        ((hi + lo) as f64) / ((1_i64 << 53) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Known-answer values for `java.util.Random(0).nextDouble()`.
    #[test]
    fn seed_zero_known_stream() {
        let mut rng = LegacyRandom::from_seed(0);
        let expected = [0.730967787376657, 0.24053641567148587, 0.6374174253501083];
        for e in expected {
            assert!((rng.next_f64() - e).abs() < 1e-15);
        }
    }

    #[test]
    fn equal_seeds_equal_streams() {
        for seed in [0, 1, -1, 845, i64::MIN, i64::MAX] {
            let mut a = LegacyRandom::from_seed(seed);
            let mut b = LegacyRandom::from_seed(seed);
            for _ in 0..100 {
                #[allow(clippy::float_cmp)]
                // Determinism test: identical seeds must produce identical streams
                {
                    assert_eq!(a.next_f64(), b.next_f64());
                }
            }
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = LegacyRandom::from_seed(0);
        let mut b = LegacyRandom::from_seed(1);
        assert!((a.next_f64() - b.next_f64()).abs() > 1e-12);
    }

    #[test]
    fn output_stays_in_unit_interval() {
        for seed in [0, -123_456_789, 7, i64::MAX] {
            let mut rng = LegacyRandom::from_seed(seed);
            for _ in 0..10_000 {
                let v = rng.next_f64();
                assert!((0.0..1.0).contains(&v), "out of range: {v}");
            }
        }
    }
}
