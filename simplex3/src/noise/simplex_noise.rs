//! Single-octave 3D simplex noise.
//!
//! Classic simplex noise: skew the input onto the simplex grid, find the
//! tetrahedron containing the point, and sum the radial-falloff gradient
//! contributions of its four corners. Gradients are selected by hashing the
//! cell coordinates through a seeded permutation table.

use tracing::trace;

use crate::math::floor;
use crate::noise::GRADIENT;
use crate::random::{LegacyRandom, Random};

/// Skewing factor for 3D simplex: `1/3`.
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`.
const G3: f64 = 1.0 / 6.0;

/// Single-octave 3D simplex noise over a seeded permutation table.
///
/// The table holds a permutation of `0..=255` mirrored to 512 entries so the
/// nested hash lookups never need a modulo. [`reseed`](Self::reseed) rebuilds
/// it wholesale; sampling never mutates it, so `&self` queries are safe to
/// run concurrently.
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Create a generator whose permutation table is shuffled by the pinned
    /// [`LegacyRandom`] stream for `seed`.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut noise = Self { perm: [0; 512] };
        noise.reseed(seed);
        noise
    }

    /// Create a generator drawing the permutation shuffle from an arbitrary
    /// deterministic source.
    #[must_use]
    pub fn from_random<R: Random>(random: &mut R) -> Self {
        let mut noise = Self { perm: [0; 512] };
        noise.shuffle(random);
        noise
    }

    /// Rebuild the permutation table from `seed`.
    ///
    /// Any `i64` seed is valid; the previous table is discarded entirely.
    pub fn reseed(&mut self, seed: i64) {
        trace!(seed, "rebuilding permutation table");
        self.shuffle(&mut LegacyRandom::from_seed(seed));
    }

    /// Reset the table to the identity permutation, swap each entry with one
    /// drawn uniformly from the whole table, and mirror the result into the
    /// upper half.
    fn shuffle<R: Random>(&mut self, random: &mut R) {
        for (i, entry) in self.perm.iter_mut().enumerate().take(256) {
            *entry = i as u8;
        }
        for i in 0..256 {
            let index = (256.0 * random.next_f64()) as usize;
            self.perm.swap(i, index);
        }
        // The mirrored upper half keeps `perm[a + perm[b + perm[c]]]` in
        // bounds without masking each level.
        let (lower, upper) = self.perm.split_at_mut(256);
        upper.copy_from_slice(lower);
    }

    /// Look up a table entry. Nested lookups add at most 256 per level, which
    /// the mirrored upper half absorbs.
    #[inline]
    fn p(&self, index: usize) -> usize {
        usize::from(self.perm[index])
    }

    /// Dot product of a gradient vector and an offset vector.
    #[inline]
    fn dot(g: &[i32; 3], x: f64, y: f64, z: f64) -> f64 {
        f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
    }

    /// Radial-falloff contribution of one simplex corner.
    #[inline]
    fn corner_noise(gradient_index: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = 0.5 - x * x - y * y - z * z;
        if t < 0.0 {
            0.0
        } else {
            let t = t * t;
            t * t * Self::dot(&GRADIENT[gradient_index], x, y, z)
        }
    }

    /// Sample the noise at `(x, y, z)`.
    ///
    /// Pure with respect to the current table: identical inputs always give
    /// identical outputs. Returns a value in approximately `[-1, 1]`.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew onto the simplex grid to find the containing cell.
        let s = (x + y + z) * F3;
        let i = floor(x + s);
        let j = floor(y + s);
        let k = floor(z + s);
        let t = f64::from(i.wrapping_add(j).wrapping_add(k)) * G3;
        let x0 = x - (f64::from(i) - t);
        let y0 = y - (f64::from(j) - t);
        let z0 = z - (f64::from(k) - t);

        // Rank the offsets to pick the tetrahedron containing the point.
        // Each branch is a fixed geometric assignment for one traversal
        // order (XYZ, XZY, ZXY, ZYX, YZX, YXZ).
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        // Corner offsets in unskewed space. A unit step on the simplex grid
        // shifts every unskewed coordinate by -G3.
        let x1 = x0 - (i1 as f64) + G3;
        let y1 = y0 - (j1 as f64) + G3;
        let z1 = z0 - (k1 as f64) + G3;
        let x2 = x0 - (i2 as f64) + 2.0 * G3;
        let y2 = y0 - (j2 as f64) + 2.0 * G3;
        let z2 = z0 - (k2 as f64) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        // Hashed gradient indices of the four corners.
        let ii = (i & 0xFF) as usize;
        let jj = (j & 0xFF) as usize;
        let kk = (k & 0xFF) as usize;
        let gi0 = self.p(ii + self.p(jj + self.p(kk))) & 15;
        let gi1 = self.p(ii + i1 + self.p(jj + j1 + self.p(kk + k1))) & 15;
        let gi2 = self.p(ii + i2 + self.p(jj + j2 + self.p(kk + k2))) & 15;
        let gi3 = self.p(ii + 1 + self.p(jj + 1 + self.p(kk + 1))) & 15;

        let n0 = Self::corner_noise(gi0, x0, y0, z0);
        let n1 = Self::corner_noise(gi1, x1, y1, z1);
        let n2 = Self::corner_noise(gi2, x2, y2, z2);
        let n3 = Self::corner_noise(gi3, x3, y3, z3);

        32.0 * (n0 + n1 + n2 + n3)
    }
}
