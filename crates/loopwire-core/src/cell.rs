//! The simple rotate-only cell.

use crate::{Channels, Direction, DirectionSet, Piece, Role, Rotation, Shape};

/// A cell of the four-direction, rotate-only puzzle.
///
/// The `shape` is fixed once a level is generated; only the `rotation`
/// changes through play. `role` marks the power source and the bulb.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Cell, Direction, Piece, Rotation, Shape};
///
/// let cell = Cell::new(Shape::L, Rotation::R0);
/// assert!(cell.has_connection(Direction::Top));
///
/// let turned = cell.turned();
/// assert_eq!(turned.rotation, Rotation::R90);
/// assert!(turned.has_connection(Direction::Bottom));
///
/// let pinned = cell.fixed();
/// assert_eq!(pinned.turned(), pinned);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// The piece topology.
    pub shape: Shape,
    /// The current rotation.
    pub rotation: Rotation,
    /// Source, bulb, or neither.
    pub role: Role,
    /// Whether the player can rotate this cell.
    pub fixed: bool,
}

impl Cell {
    /// An empty, unconnected cell.
    pub const EMPTY: Self = Self::new(Shape::Empty, Rotation::R0);

    /// Creates a plain, rotatable cell.
    #[must_use]
    pub const fn new(shape: Shape, rotation: Rotation) -> Self {
        Self {
            shape,
            rotation,
            role: Role::Plain,
            fixed: false,
        }
    }

    /// Returns this cell with the given role.
    #[must_use]
    pub const fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }

    /// Returns this cell marked as not rotatable.
    #[must_use]
    pub const fn fixed(self) -> Self {
        Self {
            fixed: true,
            ..self
        }
    }

    /// Returns this cell with a different rotation.
    #[must_use]
    pub const fn with_rotation(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }

    /// Returns the open sides at the current rotation.
    #[must_use]
    pub const fn connections(&self) -> DirectionSet {
        self.shape.connections(self.rotation)
    }

    /// Returns `true` if the cell is open towards `direction`.
    #[must_use]
    pub fn has_connection(&self, direction: Direction) -> bool {
        self.connections().has(direction)
    }

    /// Returns `true` if this is the power source.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        self.role.is_source()
    }

    /// Returns `true` if this is the bulb.
    #[must_use]
    pub const fn is_bulb(&self) -> bool {
        self.role.is_bulb()
    }
}

impl Piece for Cell {
    fn channels(&self) -> Channels {
        Channels::from_array_len([self.connections(), DirectionSet::empty()], 1)
    }

    fn role(&self) -> Role {
        self.role
    }

    fn is_fixed(&self) -> bool {
        self.fixed || self.shape == Shape::Empty
    }

    fn turned(&self) -> Self {
        if self.is_fixed() {
            return *self;
        }
        self.with_rotation(self.rotation.turned_cw())
    }
}
