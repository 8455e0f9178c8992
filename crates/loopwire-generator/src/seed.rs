use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal digits, so a
/// puzzle can be shared by its seed alone.
///
/// # Examples
///
/// ```
/// use loopwire_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("2026-10-19");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when parsing a [`PuzzleSeed`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input does not have exactly 64 characters.
    #[display("seed must be 64 hex digits, got {length} characters")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        length: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the first offending pair.
        offset: usize,
    },
}

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from a free-form phrase by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same puzzle, which makes phrases
    /// such as dates usable as daily challenges.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the seed bytes, consuming the seed.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { length: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let offset = i * 2;
            *byte = s
                .get(offset..offset + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(ParseSeedError::InvalidDigit { offset })?;
        }
        Ok(Self(bytes))
    }
}
