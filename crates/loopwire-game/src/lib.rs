//! Game state management for loopwire puzzles.
//!
//! - [`Level`] is an immutable snapshot of a grid with its power and solved
//!   state. Rotating a cell yields a new snapshot.
//! - [`Session`] plays a level with a bounded undo/redo history.
//!
//! # Examples
//!
//! ```
//! use loopwire_game::{Level, Session};
//! use loopwire_generator::{Difficulty, GridSize, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new().generate(GridSize::square(5).unwrap(), Difficulty::Easy);
//! let mut session = Session::new(Level::from_puzzle(&puzzle));
//! assert!(!session.level().is_solved());
//!
//! for (pos, offset) in puzzle.scramble.iter() {
//!     for _ in 0..offset.inverse().quarter_turns() {
//!         session.rotate(pos).unwrap();
//!     }
//! }
//! assert!(session.level().is_solved());
//! ```

pub use self::{
    error::GameError,
    level::Level,
    session::{RotateOutcome, Session},
};

mod error;
mod level;
mod session;
mod undo_redo_stack;
