//! Quarter-turn rotations.

use std::fmt::{self, Display};

/// A clockwise rotation by a whole number of quarter turns.
///
/// Rotations are stored modulo a full turn, so four successive
/// [`turned_cw`](Self::turned_cw) calls return the original value.
///
/// # Examples
///
/// ```
/// use loopwire_core::Rotation;
///
/// let r = Rotation::from_degrees(270).unwrap();
/// assert_eq!(r.turned_cw(), Rotation::R0);
/// assert_eq!(r.turned_by(r.inverse()), Rotation::R0);
/// assert!(Rotation::from_degrees(45).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rotation(u8);

/// Error returned when a rotation is not a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("rotation of {degrees} degrees is not a multiple of 90")]
pub struct RotationError {
    /// The rejected angle.
    pub degrees: u16,
}

impl Rotation {
    /// No rotation.
    pub const R0: Self = Self(0);
    /// A quarter turn clockwise.
    pub const R90: Self = Self(1);
    /// A half turn.
    pub const R180: Self = Self(2);
    /// Three quarter turns clockwise.
    pub const R270: Self = Self(3);

    /// All four rotations in increasing order.
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Creates a rotation from a number of quarter turns, wrapping modulo 4.
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    /// Creates a rotation from an angle in degrees.
    ///
    /// Angles of a full turn or more wrap around.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError`] if `degrees` is not a multiple of 90.
    pub fn from_degrees(degrees: u16) -> Result<Self, RotationError> {
        if degrees % 90 != 0 {
            return Err(RotationError { degrees });
        }
        #[expect(clippy::cast_possible_truncation)]
        let quarter_turns = ((degrees / 90) % 4) as u8;
        Ok(Self::from_quarter_turns(quarter_turns))
    }

    /// Returns the number of quarter turns (0-3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.0
    }

    /// Returns the angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    /// Returns this rotation advanced by one quarter turn clockwise.
    #[must_use]
    pub const fn turned_cw(self) -> Self {
        Self::from_quarter_turns(self.0 + 1)
    }

    /// Returns the composition of this rotation followed by `other`.
    #[must_use]
    pub const fn turned_by(self, other: Self) -> Self {
        Self::from_quarter_turns(self.0 + other.0)
    }

    /// Returns the rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.0)
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
