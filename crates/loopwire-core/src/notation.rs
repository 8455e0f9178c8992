//! Text notation for grids of [`Cell`]s.
//!
//! A grid is written one row per line, with cells separated by whitespace.
//! Each cell token is:
//!
//! 1. a shape symbol: `.` (empty), `L`, `I`, `T` or `X`;
//! 2. an optional rotation digit `0`-`3` counting quarter turns (default `0`);
//! 3. an optional role suffix: `s` for the source, `b` for the bulb;
//! 4. an optional `!` marking the cell as fixed.
//!
//! Blank lines are ignored, so raw multi-line string literals can be indented
//! freely.
//!
//! ```
//! use loopwire_core::{Cell, Grid, Position, Rotation};
//!
//! let grid: Grid<Cell> = "
//!     L1s  I1
//!     L0!  L3b
//! "
//! .parse()
//! .unwrap();
//!
//! assert!(grid[Position::new(0, 0)].is_source());
//! assert!(grid[Position::new(1, 0)].fixed);
//! assert_eq!(grid[Position::new(1, 1)].rotation, Rotation::R270);
//! assert_eq!(grid.to_string(), "L1s I1\nL0! L3b\n");
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Cell, Grid, Role, Rotation, Shape};

/// Error returned when parsing the grid notation fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contains no cells.
    #[display("grid is empty")]
    Empty,
    /// A token does not follow the cell syntax.
    #[display("invalid cell token {token:?} at line {line}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// 1-based line number among non-blank lines.
        line: usize,
    },
    /// A row has a different number of cells than the first row.
    #[display("row {line} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-based line number among non-blank lines.
        line: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        found: usize,
    },
}

/// Error returned when a single cell token is malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell token {token:?}")]
pub struct ParseCellError {
    /// The offending token.
    pub token: String,
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape.symbol())?;
        if self.shape != Shape::Empty {
            write!(f, "{}", self.rotation.quarter_turns())?;
        }
        match self.role {
            Role::Plain => {}
            Role::Source => f.write_str("s")?,
            Role::Bulb => f.write_str("b")?,
        }
        if self.fixed {
            f.write_str("!")?;
        }
        Ok(())
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCellError {
            token: token.to_owned(),
        };
        let mut chars = token.chars().peekable();
        let shape = chars.next().and_then(Shape::from_symbol).ok_or_else(invalid)?;
        let mut cell = Cell::new(shape, Rotation::R0);

        if let Some(turns) = chars.peek().and_then(|c| c.to_digit(10)) {
            let turns = u8::try_from(turns).map_err(|_| invalid())?;
            if turns > 3 {
                return Err(invalid());
            }
            cell.rotation = Rotation::from_quarter_turns(turns);
            chars.next();
        }

        match chars.peek() {
            Some('s') => {
                cell.role = Role::Source;
                chars.next();
            }
            Some('b') => {
                cell.role = Role::Bulb;
                chars.next();
            }
            _ => {}
        }

        if chars.peek() == Some(&'!') {
            cell.fixed = true;
            chars.next();
        }

        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(cell)
    }
}

impl Display for Grid<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for (i, cell) in self.row(row).iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid<Cell> {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (i, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let line_no = i + 1;
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<Cell>()
                        .map_err(|ParseCellError { token }| GridParseError::InvalidToken {
                            token,
                            line: line_no,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = rows.first().map(Vec::len)
                && first != row.len()
            {
                return Err(GridParseError::RaggedRow {
                    line: line_no,
                    expected: first,
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }
        Grid::from_rows(rows).ok_or(GridParseError::Empty)
    }
}
