//! Cardinal directions and direction sets.

use std::fmt::{self, Display};

/// One of the four sides of a grid cell.
///
/// Directions are ordered clockwise starting at the top, and the ordinal of
/// each variant matches that order (`Top = 0` .. `Left = 3`). Rotating a
/// direction by one quarter turn moves it one step along this cycle.
///
/// # Examples
///
/// ```
/// use loopwire_core::Direction;
///
/// assert_eq!(Direction::Top.opposite(), Direction::Bottom);
/// assert_eq!(Direction::Left.rotated_cw(1), Direction::Top);
/// assert_eq!(Direction::Right.offset(), (0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Towards row `r - 1`.
    Top = 0,
    /// Towards column `c + 1`.
    Right = 1,
    /// Towards row `r + 1`.
    Bottom = 2,
    /// Towards column `c - 1`.
    Left = 3,
}

impl Direction {
    /// All four directions in clockwise order, starting at [`Direction::Top`].
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns the direction with the given ordinal, wrapping modulo 4.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal % 4 {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }

    /// Returns the ordinal of this direction (0-3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotated_cw(2)
    }

    /// Returns this direction rotated clockwise by `quarter_turns` steps.
    #[must_use]
    pub const fn rotated_cw(self, quarter_turns: u8) -> Self {
        Self::from_ordinal(self.ordinal() + quarter_turns % 4)
    }

    /// Returns the `(row, col)` delta of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// A set of open sides of a piece.
    ///
    /// Bit `n` corresponds to the direction with ordinal `n`, so a clockwise
    /// rotation of the whole set is a 4-bit rotate-left.
    ///
    /// # Examples
    ///
    /// ```
    /// use loopwire_core::{Direction, DirectionSet};
    ///
    /// let corner = DirectionSet::TOP | DirectionSet::RIGHT;
    /// assert_eq!(corner.rotated_cw(1), DirectionSet::RIGHT | DirectionSet::BOTTOM);
    /// assert!(corner.has(Direction::Top));
    /// assert_eq!(corner.len(), 2);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        /// Open towards the top.
        const TOP = 1 << 0;
        /// Open towards the right.
        const RIGHT = 1 << 1;
        /// Open towards the bottom.
        const BOTTOM = 1 << 2;
        /// Open towards the left.
        const LEFT = 1 << 3;
    }
}

impl DirectionSet {
    /// Returns `true` if `direction` is in the set.
    #[must_use]
    pub fn has(self, direction: Direction) -> bool {
        self.contains(Self::from(direction))
    }

    /// Returns the number of open directions.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Returns the set rotated clockwise by `quarter_turns` steps.
    #[must_use]
    pub const fn rotated_cw(self, quarter_turns: u8) -> Self {
        let turns = quarter_turns % 4;
        let bits = self.bits();
        Self::from_bits_truncate((bits << turns) | (bits >> ((4 - turns) % 4)))
    }

    /// Iterates over the directions in the set in clockwise order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.has(*d))
    }

    /// Returns `true` if the set is exactly two opposite directions.
    #[must_use]
    pub fn is_straight(self) -> bool {
        self == (Self::TOP | Self::BOTTOM) || self == (Self::LEFT | Self::RIGHT)
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        Self::from_bits_truncate(1 << direction.ordinal())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, d| set | Self::from(d))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_opposite_is_two_steps() {
        for d in Direction::ALL {
            assert_eq!(d.opposite(), Direction::from_ordinal((d.ordinal() + 2) % 4));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            let (or, oc) = d.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_direction_set_iteration_order() {
        let set = DirectionSet::LEFT | DirectionSet::TOP | DirectionSet::BOTTOM;
        let dirs: Vec<_> = set.directions().collect();
        assert_eq!(dirs, vec![Direction::Top, Direction::Bottom, Direction::Left]);
        assert_eq!(set, dirs.into_iter().collect());
    }

    #[test]
    fn test_rotated_cw_wraps_left_to_top() {
        assert_eq!(DirectionSet::LEFT.rotated_cw(1), DirectionSet::TOP);
        assert_eq!(DirectionSet::all().rotated_cw(3), DirectionSet::all());
        assert_eq!(DirectionSet::empty().rotated_cw(2), DirectionSet::empty());
    }

    #[test]
    fn test_is_straight() {
        assert!((DirectionSet::TOP | DirectionSet::BOTTOM).is_straight());
        assert!((DirectionSet::LEFT | DirectionSet::RIGHT).is_straight());
        assert!(!(DirectionSet::TOP | DirectionSet::RIGHT).is_straight());
    }

    proptest! {
        #[test]
        fn prop_four_quarter_turns_is_identity(bits in 0u8..16) {
            let set = DirectionSet::from_bits_truncate(bits);
            let turned = (0..4).fold(set, |s, _| s.rotated_cw(1));
            prop_assert_eq!(turned, set);
        }

        #[test]
        fn prop_set_rotation_matches_direction_rotation(bits in 0u8..16, turns in 0u8..8) {
            let set = DirectionSet::from_bits_truncate(bits);
            let expected: DirectionSet = set.directions().map(|d| d.rotated_cw(turns)).collect();
            prop_assert_eq!(set.rotated_cw(turns), expected);
            prop_assert_eq!(set.rotated_cw(turns).len(), set.len());
        }
    }
}
