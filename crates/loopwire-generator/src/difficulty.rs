use std::{ops::RangeInclusive, str::FromStr};

/// How far each piece is turned away from its solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Difficulty {
    /// One or two quarter turns per piece.
    #[display("easy")]
    Easy,
    /// One to three quarter turns per piece.
    #[default]
    #[display("medium")]
    Medium,
    /// One to four quarter turns per piece.
    #[display("hard")]
    Hard,
}

/// Error returned when parsing an unknown [`Difficulty`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {input:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub input: String,
}

impl Difficulty {
    /// All difficulties from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the range of quarter turns added to each piece when scrambling.
    ///
    /// A draw of four quarter turns is a full turn, so `Hard` occasionally
    /// leaves a piece in place.
    #[must_use]
    pub const fn scramble_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 1..=2,
            Self::Medium => 1..=3,
            Self::Hard => 1..=4,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Hard".parse(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse(), Ok(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_scramble_ranges_grow() {
        for d in Difficulty::ALL {
            assert_eq!(*d.scramble_range().start(), 1);
        }
        assert_eq!(*Difficulty::Easy.scramble_range().end(), 2);
        assert_eq!(*Difficulty::Medium.scramble_range().end(), 3);
        assert_eq!(*Difficulty::Hard.scramble_range().end(), 4);
    }
}
