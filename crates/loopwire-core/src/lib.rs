//! Core data structures for loopwire puzzles.
//!
//! This crate provides the value types shared by propagation, generation,
//! and game management: directions, rotations, piece shapes, grid positions,
//! the rectangular [`Grid`] container, and the two piece models.
//!
//! # Overview
//!
//! 1. **Geometry** - Where things are and which way they point
//!    - [`direction`]: The four cardinal [`Direction`]s and [`DirectionSet`]
//!    - [`rotation`]: Quarter-turn [`Rotation`]s
//!    - [`position`]: Row/column [`Position`]s
//!    - [`grid`]: The row-major [`Grid`] container
//!
//! 2. **Pieces** - What sits in each grid cell
//!    - [`shape`]: The five canonical [`Shape`]s (`Empty`, `L`, `I`, `T`, `X`)
//!    - [`cell`]: The simple rotate-only [`Cell`]
//!    - [`tile`]: The richer [`Tile`] model with bridges, switches and blockers
//!    - [`piece`]: The [`Piece`] capability shared by both, and [`are_connected`]
//!
//! 3. **Notation** - A compact text format for grids of [`Cell`]s, used by tests
//!    and the terminal front-end (see [`notation`]).
//!
//! # Examples
//!
//! ```
//! use loopwire_core::{Cell, Direction, Grid, Position, are_connected};
//!
//! let grid: Grid<Cell> = "
//!     L1s I1 L2
//!     I0  .  I0
//!     L0  I1 L3b
//! "
//! .parse()
//! .unwrap();
//!
//! let source = &grid[Position::new(0, 0)];
//! let right = &grid[Position::new(0, 1)];
//! assert!(are_connected(source, right, Direction::Right));
//! ```

pub mod cell;
pub mod direction;
pub mod grid;
pub mod notation;
pub mod piece;
pub mod position;
pub mod rotation;
pub mod shape;
pub mod tile;

pub use self::{
    cell::Cell,
    direction::{Direction, DirectionSet},
    grid::Grid,
    notation::{GridParseError, ParseCellError},
    piece::{Channels, Piece, Role, are_connected, channel_link},
    position::Position,
    rotation::{Rotation, RotationError},
    shape::{Shape, connections_of, has_connection},
    tile::{SwitchState, Tile, TileId, TileKind},
};
