use loopwire_core::Position;

/// Errors returned by level and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}
