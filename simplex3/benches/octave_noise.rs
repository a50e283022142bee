#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use simplex3::{NoiseParameters, OctaveNoise, SimplexNoise};
use std::hint::black_box;

fn bench_single_sample(c: &mut Criterion) {
    let noise = SimplexNoise::new(0);
    c.bench_function("simplex_single_sample", |b| {
        b.iter(|| noise.get_value(black_box(12.3), black_box(-4.5), black_box(7.8)));
    });
}

fn bench_octave_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("octave_noise_grid");
    for octaves in [1u32, 4, 8] {
        let noise = OctaveNoise::new(NoiseParameters {
            octaves,
            frequency: 2.0,
            ..NoiseParameters::default()
        });
        group.bench_with_input(BenchmarkId::from_parameter(octaves), &noise, |b, noise| {
            b.iter(|| {
                for i in 0..32 {
                    for j in 0..32 {
                        black_box(noise.get_noise(
                            f64::from(i) * 0.1,
                            f64::from(j) * 0.1,
                            black_box(0.0),
                        ));
                    }
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_sample, bench_octave_grid);
criterion_main!(benches);
