//! Benchmarks for loopwire puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_<strategy>`**: Generates a 12x12 `hard` puzzle with a fixed
//!   loop strategy. Measures loop construction, layout, scrambling and the
//!   unsolved check.
//! - **`generator_size`**: Generates puzzles with random strategies over a
//!   range of square sizes.
//!
//! # Test Data
//!
//! Uses three fixed seeds to keep runs reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use loopwire_generator::{Difficulty, GridSize, LoopStrategy, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SIZES: [usize; 4] = [4, 8, 16, 32];

fn bench_generator_strategies(c: &mut Criterion) {
    let size = GridSize::square(12).unwrap();
    for strategy in LoopStrategy::ALL {
        let generator = PuzzleGenerator::with_strategy(strategy);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{strategy}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(size, Difficulty::Hard, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_generator_size(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    let seed = PuzzleSeed::from_str(SEEDS[0]).unwrap();
    for n in SIZES {
        let size = GridSize::square(n).unwrap();
        c.bench_with_input(BenchmarkId::new("generator_size", n), &size, |b, size| {
            b.iter_batched(
                || hint::black_box(seed),
                |seed| generator.generate_with_seed(*size, Difficulty::Medium, seed),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_generator_strategies,
        bench_generator_size
);
criterion_main!(benches);
