use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
};

use loopwire_core::Position;

/// The dimensions of a generated puzzle.
///
/// Both sides must lie in [`GridSize::RANGE`]; a grid narrower than two cells
/// has no room for a closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

/// Error returned when a [`GridSize`] is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("grid size {rows}x{cols} is out of range (each side must be 2 to 64)")]
pub struct GridSizeError {
    /// Requested row count.
    pub rows: usize,
    /// Requested column count.
    pub cols: usize,
}

impl GridSize {
    /// Valid values for either side.
    pub const RANGE: RangeInclusive<usize> = 2..=64;

    /// Creates a size of `rows` by `cols` cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if either side is outside [`GridSize::RANGE`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridSizeError> {
        if !Self::RANGE.contains(&rows) || !Self::RANGE.contains(&cols) {
            return Err(GridSizeError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Creates a square size.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if `n` is outside [`GridSize::RANGE`].
    pub fn square(n: usize) -> Result<Self, GridSizeError> {
        Self::new(n, n)
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns the source corner, the top-left cell.
    #[must_use]
    pub const fn source(self) -> Position {
        Position::new(0, 0)
    }

    /// Returns the bulb corner, the bottom-right cell.
    #[must_use]
    pub const fn bulb(self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
