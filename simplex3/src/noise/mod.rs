//! Noise generation primitives.
//!
//! - [`SimplexNoise`] - single-octave 3D simplex noise over a seeded
//!   permutation table
//! - [`OctaveNoise`] - multi-octave composition, configured through
//!   [`NoiseParameters`]

mod octave_noise;
mod simplex_noise;

pub use octave_noise::{NoiseParameters, OctaveNoise};
pub use simplex_noise::SimplexNoise;

/// Gradient vectors for 3D simplex noise: the 12 cube-edge directions plus
/// four fillers so a hashed index masks cleanly to 4 bits.
pub(crate) const GRADIENT: [[i32; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [-1, 1, 1],
    [1, -1, 1],
    [1, 1, -1],
    [0, 0, 0],
];
