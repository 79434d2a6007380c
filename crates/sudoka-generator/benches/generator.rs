//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation pipeline (solved-grid construction plus
//! uniqueness-gated clue removal) for each difficulty, over a small set of
//! fixed seeds so results are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudoka_generator::{Difficulty, PuzzleGenerator};

const SEEDS: [u64; 3] = [0x5eed_0001, 0x5eed_0002, 0x5eed_0003];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        for seed in SEEDS {
            group.bench_with_input(
                BenchmarkId::new(difficulty.to_string(), format!("seed_{seed:x}")),
                &seed,
                |b, &seed| {
                    b.iter(|| {
                        PuzzleGenerator::generate_seeded(hint::black_box(seed), difficulty)
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = bench_generate
);
criterion_main!(benches);
