//! The piece capability shared by every cell model, and the adjacency test.

use tinyvec::ArrayVec;

use crate::{Direction, DirectionSet};

/// Independent conduction channels through a single piece.
///
/// Ordinary pieces have one channel. A bridge has two crossing channels that
/// carry unrelated currents; a blocker has none.
pub type Channels = ArrayVec<[DirectionSet; 2]>;

/// What a piece contributes to the circuit besides its wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// An ordinary piece.
    #[default]
    Plain,
    /// Seeds power propagation.
    Source,
    /// Must sit on a closed circuit for the puzzle to be solved.
    Bulb,
}

impl Role {
    /// Returns `true` for [`Role::Source`].
    #[must_use]
    pub const fn is_source(self) -> bool {
        matches!(self, Self::Source)
    }

    /// Returns `true` for [`Role::Bulb`].
    #[must_use]
    pub const fn is_bulb(self) -> bool {
        matches!(self, Self::Bulb)
    }
}

/// A grid occupant that yields open directions given its current state.
///
/// Propagation and solved-state evaluation are written against this trait
/// only, so every piece model (plain rotating cells, bridges, switches,
/// blockers) is handled by the same traversal.
pub trait Piece: Clone {
    /// Returns the channels through this piece in its current state.
    fn channels(&self) -> Channels;

    /// Returns the role of this piece.
    fn role(&self) -> Role;

    /// Returns `true` if player interaction cannot change this piece.
    fn is_fixed(&self) -> bool;

    /// Returns the piece after one player interaction.
    ///
    /// Fixed pieces return an unchanged copy.
    #[must_use]
    fn turned(&self) -> Self;

    /// Returns the union of every channel's open sides.
    fn open_directions(&self) -> DirectionSet {
        self.channels()
            .iter()
            .fold(DirectionSet::empty(), |acc, ch| acc | *ch)
    }

    /// Returns the index of the channel open towards `direction`, if any.
    fn channel_toward(&self, direction: Direction) -> Option<usize> {
        self.channels().iter().position(|ch| ch.has(direction))
    }
}

/// Returns the channel of `b` that channel `a_channel` of `a` links to when
/// `b` is the neighbor of `a` in `direction`.
///
/// A link needs both halves: `a`'s channel must be open towards `direction`
/// and `b` must have a channel open towards the opposite side. A one-sided
/// stub is not a link.
pub fn channel_link<A, B>(a: &A, a_channel: usize, b: &B, direction: Direction) -> Option<usize>
where
    A: Piece,
    B: Piece,
{
    let open = a.channels().get(a_channel).copied()?;
    if !open.has(direction) {
        return None;
    }
    b.channel_toward(direction.opposite())
}

/// Returns `true` if `a` and its neighbor `b` in `direction` are mutually
/// connected.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Cell, Direction, Rotation, Shape, are_connected};
///
/// let a = Cell::new(Shape::I, Rotation::R90); // open left/right
/// let b = Cell::new(Shape::L, Rotation::R270); // open left/top
/// assert!(are_connected(&a, &b, Direction::Right));
/// assert!(are_connected(&b, &a, Direction::Left));
///
/// let c = Cell::new(Shape::I, Rotation::R0); // open top/bottom
/// assert!(!are_connected(&a, &c, Direction::Right));
/// ```
pub fn are_connected<A, B>(a: &A, b: &B, direction: Direction) -> bool
where
    A: Piece,
    B: Piece,
{
    (0..a.channels().len()).any(|ch| channel_link(a, ch, b, direction).is_some())
}
