//! Example demonstrating loopwire puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`, optionally pinned to one loop strategy
//! - Generate a puzzle from a random seed, a hex seed or a phrase
//! - Display the scrambled grid, the solved grid and the seed
//! - Sample many puzzles and keep the one with the longest loop
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the size, difficulty and loop strategy:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --rows 6 --cols 8 --difficulty hard --strategy random
//! ```
//!
//! Reproduce a puzzle from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase 2026-10-19
//! ```
//!
//! Sample 1000 random-loop puzzles and keep the longest loop:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --strategy random --tries 1000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use loopwire_circuit::evaluate;
use loopwire_generator::{
    Difficulty, GeneratedPuzzle, GridSize, LoopStrategy, PuzzleGenerator, PuzzleSeed,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Any,
    Edge,
    Inner,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyKind {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, value_name = "ROWS", default_value_t = 6)]
    rows: usize,

    /// Number of columns.
    #[arg(long, value_name = "COLS", default_value_t = 6)]
    cols: usize,

    /// Scramble strength.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyKind,

    /// Loop strategy to use.
    #[arg(long, value_name = "KIND", default_value = "any")]
    strategy: StrategyKind,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase hashed into the seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Puzzles to sample when looking for the longest loop.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    tries: usize,
}

fn main() {
    let args = Args::parse();

    let size = match GridSize::new(args.rows, args.cols) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let difficulty = match args.difficulty {
        DifficultyKind::Easy => Difficulty::Easy,
        DifficultyKind::Medium => Difficulty::Medium,
        DifficultyKind::Hard => Difficulty::Hard,
    };
    let generator = match args.strategy {
        StrategyKind::Any => PuzzleGenerator::new(),
        StrategyKind::Edge => PuzzleGenerator::with_strategy(LoopStrategy::Edge),
        StrategyKind::Inner => PuzzleGenerator::with_strategy(LoopStrategy::Inner),
        StrategyKind::Random => PuzzleGenerator::with_strategy(LoopStrategy::Random),
    };

    let fixed_seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase));
    if let Some(seed) = fixed_seed {
        let puzzle = generator.generate_with_seed(size, difficulty, seed);
        print_puzzle(&puzzle, None);
        return;
    }

    if args.tries == 0 {
        eprintln!("--tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.tries)
        .into_par_iter()
        .map(|_| generator.generate(size, difficulty))
        .max_by_key(|puzzle| puzzle.loop_path.len());

    if let Some(puzzle) = best {
        print_puzzle(&puzzle, Some(args.tries));
        return;
    }

    eprintln!("No puzzle was generated.");
    process::exit(1);
}

fn print_puzzle(puzzle: &GeneratedPuzzle, tries: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Parameters:");
    println!("  Size: {}", puzzle.size);
    println!("  Difficulty: {}", puzzle.difficulty);
    println!("  Strategy: {}", puzzle.strategy);
    println!("  Loop length: {}", puzzle.loop_path.len());
    if let Some(tries) = tries {
        println!("  Sampled: {tries}");
    }
    println!();

    println!("Problem:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    let solved = puzzle.solved_grid();
    println!("Solution:");
    for line in solved.to_string().lines() {
        println!("  {line}");
    }
    println!();

    let state = evaluate(&solved);
    println!("Check:");
    println!("  Solved: {}", state.solved);
    println!("  Powered: {}", state.powered.powered_count());
}
