//! Piece shapes and the connection model.

use std::fmt::{self, Display};

use crate::{Direction, DirectionSet, Rotation};

/// The fixed topology of a piece, independent of its rotation.
///
/// Each shape has a base set of open sides at [`Rotation::R0`]; rotating the
/// piece shifts every open side clockwise by the same number of steps.
///
/// | Shape | Base connections      |
/// |-------|-----------------------|
/// | Empty | none                  |
/// | L     | top, right            |
/// | I     | top, bottom           |
/// | T     | top, right, bottom    |
/// | X     | all four              |
///
/// # Examples
///
/// ```
/// use loopwire_core::{Direction, Rotation, Shape};
///
/// let open = Shape::T.connections(Rotation::R90);
/// assert!(!open.has(Direction::Top));
/// assert_eq!(open.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Shape {
    /// No connections at all.
    #[default]
    Empty,
    /// Two connections 90 degrees apart.
    L,
    /// Two opposite connections.
    I,
    /// Three connections.
    T,
    /// Four connections.
    X,
}

impl Shape {
    /// All shapes, from fewest to most connections.
    pub const ALL: [Self; 5] = [Self::Empty, Self::L, Self::I, Self::T, Self::X];

    /// Shapes used to fill cells that are not part of the designed loop.
    pub const DECORATIVE: [Self; 3] = [Self::L, Self::I, Self::T];

    /// Returns the open sides at [`Rotation::R0`].
    #[must_use]
    pub const fn base_connections(self) -> DirectionSet {
        match self {
            Self::Empty => DirectionSet::empty(),
            Self::L => DirectionSet::TOP.union(DirectionSet::RIGHT),
            Self::I => DirectionSet::TOP.union(DirectionSet::BOTTOM),
            Self::T => DirectionSet::TOP
                .union(DirectionSet::RIGHT)
                .union(DirectionSet::BOTTOM),
            Self::X => DirectionSet::all(),
        }
    }

    /// Returns the open sides of this shape at the given rotation.
    #[must_use]
    pub const fn connections(self, rotation: Rotation) -> DirectionSet {
        self.base_connections().rotated_cw(rotation.quarter_turns())
    }

    /// Returns `true` if this shape at `rotation` is open towards `direction`.
    #[must_use]
    pub fn has_connection(self, rotation: Rotation, direction: Direction) -> bool {
        self.connections(rotation).has(direction)
    }

    /// Finds the shape and smallest rotation whose open sides are exactly `open`.
    ///
    /// Two adjacent sides give an `L`, two opposite sides an `I`, three sides a
    /// `T` and four sides an `X`. An empty set maps to [`Shape::Empty`].
    /// Returns `None` for a single open side, which no shape realizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopwire_core::{DirectionSet, Rotation, Shape};
    ///
    /// let open = DirectionSet::LEFT | DirectionSet::TOP;
    /// assert_eq!(Shape::realizing(open), Some((Shape::L, Rotation::R270)));
    /// assert_eq!(Shape::realizing(DirectionSet::LEFT), None);
    /// ```
    #[must_use]
    pub fn realizing(open: DirectionSet) -> Option<(Self, Rotation)> {
        let shape = match open.len() {
            0 => Self::Empty,
            2 if open.is_straight() => Self::I,
            2 => Self::L,
            3 => Self::T,
            4 => Self::X,
            _ => return None,
        };
        Rotation::ALL
            .into_iter()
            .find(|r| shape.connections(*r) == open)
            .map(|r| (shape, r))
    }

    /// Returns the single-character symbol used by the grid notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::L => 'L',
            Self::I => 'I',
            Self::T => 'T',
            Self::X => 'X',
        }
    }

    /// Parses a grid notation symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            'L' => Some(Self::L),
            'I' => Some(Self::I),
            'T' => Some(Self::T),
            'X' => Some(Self::X),
            _ => None,
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns the open sides of `shape` at `rotation`.
#[must_use]
pub const fn connections_of(shape: Shape, rotation: Rotation) -> DirectionSet {
    shape.connections(rotation)
}

/// Returns `true` if `shape` at `rotation` is open towards `direction`.
#[must_use]
pub fn has_connection(shape: Shape, rotation: Rotation, direction: Direction) -> bool {
    shape.has_connection(rotation, direction)
}
