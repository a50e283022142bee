//! Seedable 3D simplex noise with multi-octave ("fractal") composition.
//!
//! The crate provides two layers:
//!
//! - [`SimplexNoise`] - single-octave 3D simplex noise over a seeded
//!   permutation table, returning values in approximately `[-1, 1]`
//! - [`OctaveNoise`] - multi-octave composition with per-octave frequency
//!   growth and amplitude decay, scaled into `[base, base + amplitude]`
//!
//! Every sample is a pure function of the seed and the input coordinates:
//! the same seed reproduces the same noise field on every platform, because
//! the permutation shuffle draws from the pinned [`LegacyRandom`] generator
//! rather than a platform RNG. Queries take `&self` and share no mutable
//! state, so independent samples may run concurrently; re-seeding takes
//! `&mut self` and is the only mutator.

pub mod math;
pub mod noise;
pub mod random;

pub use noise::{NoiseParameters, OctaveNoise, SimplexNoise};
pub use random::{LegacyRandom, Random};
