//! Grid positions.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a grid.
///
/// Coordinates are 0-indexed; `row` increases downward and `col` increases
/// rightward.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Direction, Position};
///
/// let pos = Position::new(0, 1);
/// assert_eq!(pos.neighbor(Direction::Bottom, 3, 3), Some(Position::new(1, 1)));
/// assert_eq!(pos.neighbor(Direction::Top, 3, 3), None);
/// assert_eq!(pos.direction_to(Position::new(0, 0)), Some(Direction::Left));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the adjacent position in `direction`, if it lies inside a
    /// `rows` x `cols` grid.
    #[must_use]
    pub fn neighbor(self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Self { row, col })
    }

    /// Returns the direction from `self` to `other` if they are grid-adjacent.
    ///
    /// Adjacent means differing by exactly one step along exactly one axis.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        match (
            other.row.cast_signed() - self.row.cast_signed(),
            other.col.cast_signed() - self.col.cast_signed(),
        ) {
            (-1, 0) => Some(Direction::Top),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Bottom),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Returns `true` if `other` is grid-adjacent to `self`.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.direction_to(other).is_some()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
