//! Power propagation and solved-state evaluation for loopwire grids.
//!
//! Evaluation is a two-stage pipeline that runs from scratch after every
//! move:
//!
//! 1. [`propagate`] floods power breadth-first from every source across
//!    mutual connections and returns a [`PoweredMatrix`].
//! 2. [`is_solved`] checks that every bulb sits on a closed circuit: it must
//!    be powered, and at least two of its links must lead back to a source
//!    without passing through the bulb itself.
//!
//! Both stages are generic over [`Piece`](loopwire_core::Piece), so plain
//! rotating cells and the richer tile model (bridges, switches, blockers)
//! share one traversal.
//!
//! # Examples
//!
//! ```
//! use loopwire_circuit::evaluate;
//! use loopwire_core::{Cell, Grid, Position};
//!
//! let grid: Grid<Cell> = "
//!     L1s I1 L2
//!     I0  .  I0
//!     L0  I1 L3b
//! "
//! .parse()
//! .unwrap();
//!
//! let state = evaluate(&grid);
//! assert!(state.solved);
//! assert_eq!(state.powered.powered_count(), 8);
//! assert!(!state.powered.is_powered(Position::new(1, 1)));
//! ```

pub use self::{
    evaluation::{CircuitState, MIN_BULB_LINKS, bulb_links, evaluate, is_solved},
    power::PoweredMatrix,
    propagation::propagate,
};

mod evaluation;
mod power;
mod propagation;

#[cfg(test)]
mod testing;
