//! Multi-octave ("fractal") composition of simplex noise.
//!
//! Sums several simplex layers sampled at growing frequencies and shrinking
//! amplitudes, then rescales the sum so the composed signal lands in
//! `[base, base + amplitude]` for any octave count.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::noise::SimplexNoise;

/// Configuration for [`OctaveNoise`].
///
/// Every field has a default, so a serialized config may specify any subset
/// of them. Out-of-range values are clamped at construction, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParameters {
    /// Number of noise layers summed per query (raised to at least 1).
    pub octaves: u32,
    /// Peak output deviation: output lands in `[base, base + amplitude]`.
    pub amplitude: f64,
    /// Per-octave coordinate multiplier, applied cumulatively each layer.
    pub frequency: f64,
    /// Per-octave amplitude decay factor, clamped to `[0, 1]`.
    /// `persistance` (sic) keeps the historical spelling.
    pub persistance: f64,
    /// Output offset: lower bound of the output interval.
    pub base: f64,
    /// Seed for the permutation table.
    pub seed: i64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            octaves: 1,
            amplitude: 1.0,
            frequency: 1.0,
            persistance: 0.5,
            base: 0.0,
            seed: 0,
        }
    }
}

/// Multi-octave 3D simplex noise generator.
///
/// Owns its configuration and permutation table exclusively; multiple
/// independent generators (one per terrain layer, say) are cheap to hold
/// side by side. Queries take `&self`; [`reseed`](Self::reseed) is the only
/// mutator.
#[derive(Debug, Clone)]
pub struct OctaveNoise {
    simplex: SimplexNoise,
    octaves: u32,
    frequency: f64,
    persistance: f64,
    scale: f64,
    base_offset: f64,
}

impl OctaveNoise {
    /// Build a generator from `params`, clamping out-of-range values
    /// silently: `octaves` is raised to at least 1 and `persistance` clamped
    /// into `[0, 1]`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    // The geometric-series normalization divides by `1 - persistance^octaves`,
    // so exactly 1.0 (the value `clamp` pins any overshoot to) must take the
    // dedicated branch.
    pub fn new(params: NoiseParameters) -> Self {
        let octaves = params.octaves.max(1);
        let persistance = params.persistance.clamp(0.0, 1.0);

        // Closed-form normalization of the geometric series of octave
        // amplitudes: the summed signal stays proportional to `amplitude`
        // regardless of octave count.
        let scale = if persistance == 1.0 {
            f64::from(octaves) * params.amplitude / 2.0
        } else {
            (1.0 - persistance) / (1.0 - persistance.powf(f64::from(octaves)))
                * params.amplitude
                / 2.0
        };

        trace!(
            seed = params.seed,
            octaves, "building octave noise generator"
        );

        Self {
            simplex: SimplexNoise::new(params.seed),
            octaves,
            frequency: params.frequency,
            persistance,
            scale,
            // Shifts the zero-centered weighted sum up into
            // [base, base + amplitude].
            base_offset: params.base + params.amplitude / 2.0,
        }
    }

    /// Rebuild the permutation table from `seed`, keeping the layering
    /// parameters. The previous table is discarded entirely.
    pub fn reseed(&mut self, seed: i64) {
        self.simplex.reseed(seed);
    }

    /// Sample the composed noise at `(x, y, z)`.
    ///
    /// Octave 0 samples the raw coordinates; each further octave multiplies
    /// the coordinates by `frequency` and the layer amplitude by
    /// `persistance`. Runs in `O(octaves)`.
    #[must_use]
    pub fn get_noise(&self, mut x: f64, mut y: f64, mut z: f64) -> f64 {
        let mut noise = 0.0;
        let mut amplitude = 1.0;

        for _ in 0..self.octaves {
            noise += self.simplex.get_value(x, y, z) * amplitude;
            x *= self.frequency;
            y *= self.frequency;
            z *= self.frequency;
            amplitude *= self.persistance;
        }

        noise * self.scale + self.base_offset
    }
}
