//! Solvable puzzle generation for loopwire.
//!
//! A puzzle is built in three steps:
//!
//! 1. A closed loop through the source (top-left) and bulb (bottom-right)
//!    corners is laid out by one of the [`LoopStrategy`] variants. Malformed
//!    loops fall back to the grid perimeter.
//! 2. Every loop cell receives the piece that opens exactly towards its two
//!    loop neighbors; the other cells get random decorative pieces.
//! 3. Every piece is turned by a random number of quarter turns scaled by
//!    [`Difficulty`].
//!
//! Turning every piece back by its scramble offset always yields a solved
//! circuit. All randomness comes from a [`PuzzleSeed`], so a seed reproduces
//! its puzzle exactly.
//!
//! # Examples
//!
//! ```
//! use loopwire_generator::{Difficulty, GridSize, LoopStrategy, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::with_strategy(LoopStrategy::Edge);
//! let puzzle = generator.generate_with_seed(
//!     GridSize::square(4).unwrap(),
//!     Difficulty::Easy,
//!     PuzzleSeed::from_phrase("daily"),
//! );
//! assert_eq!(puzzle.loop_path.len(), 12);
//! ```

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    loop_path::{LoopPath, LoopStrategy, ParseLoopStrategyError},
    seed::{ParseSeedError, PuzzleSeed},
    size::{GridSize, GridSizeError},
};

mod difficulty;
mod generator;
pub mod loop_path;
mod seed;
mod size;
