//! Closed loops of grid cells and the strategies that build them.

use std::{collections::HashSet, str::FromStr};

use loopwire_core::{Direction, DirectionSet, Position};
use rand::RngExt as _;
use rand_pcg::Pcg64;

use crate::GridSize;

/// How the generator lays out the designed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LoopStrategy {
    /// The grid perimeter, walked clockwise from the source.
    #[display("edge")]
    Edge,
    /// The grid perimeter, walked counter-clockwise from the source.
    #[display("inner")]
    Inner,
    /// Two monotone staircases between source and bulb, one above the other.
    #[display("random")]
    Random,
}

/// Error returned when parsing an unknown [`LoopStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown loop strategy {input:?} (expected edge, inner or random)")]
pub struct ParseLoopStrategyError {
    /// The rejected input.
    pub input: String,
}

impl LoopStrategy {
    /// All strategies.
    pub const ALL: [Self; 3] = [Self::Edge, Self::Inner, Self::Random];
}

impl FromStr for LoopStrategy {
    type Err = ParseLoopStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLoopStrategyError {
                input: s.to_owned(),
            })
    }
}

/// An ordered cycle of grid positions.
///
/// Consecutive cells, including the last and the first, are expected to be
/// grid-adjacent; [`is_closed_cycle`](Self::is_closed_cycle) checks this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopPath {
    cells: Vec<Position>,
}

impl LoopPath {
    /// Wraps a sequence of positions without validating it.
    #[must_use]
    pub fn from_cells(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    /// Returns the cells in loop order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the loop has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is on the loop.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns `true` if the path is a valid closed cycle.
    ///
    /// A valid cycle has at least four cells, no duplicates, and every cell
    /// adjacent to its successor (wrapping from the last to the first).
    #[must_use]
    pub fn is_closed_cycle(&self) -> bool {
        if self.cells.len() < 4 {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.cells.len());
        if !self.cells.iter().all(|pos| seen.insert(*pos)) {
            return false;
        }
        (0..self.cells.len()).all(|i| self.cells[i].is_adjacent(self.successor(i)))
    }

    /// Returns the sides the `i`-th cell must open to reach its cyclic
    /// predecessor and successor.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn required_directions(&self, i: usize) -> DirectionSet {
        let cell = self.cells[i];
        [self.predecessor(i), self.successor(i)]
            .into_iter()
            .filter_map(|other| cell.direction_to(other))
            .collect()
    }

    fn predecessor(&self, i: usize) -> Position {
        self.cells[(i + self.cells.len() - 1) % self.cells.len()]
    }

    fn successor(&self, i: usize) -> Position {
        self.cells[(i + 1) % self.cells.len()]
    }
}

/// Builds the loop for `strategy`.
///
/// Returns the strategy actually used together with the loop: a malformed
/// random loop falls back to [`LoopStrategy::Edge`], and an empty or
/// malformed perimeter falls back to [`default_rectangle`].
pub(crate) fn build(
    strategy: LoopStrategy,
    size: GridSize,
    rng: &mut Pcg64,
) -> (LoopStrategy, LoopPath) {
    let path = match strategy {
        LoopStrategy::Edge => wall_follow(size, Direction::Right, 1),
        LoopStrategy::Inner => wall_follow(size, Direction::Bottom, 3),
        LoopStrategy::Random => {
            let path = staircase(size, rng);
            if path.is_closed_cycle() {
                path
            } else {
                log::debug!(
                    "random loop of {} cell(s) is malformed, falling back to edge loop",
                    path.len()
                );
                return build(LoopStrategy::Edge, size, rng);
            }
        }
    };
    if path.is_closed_cycle() {
        return (strategy, path);
    }
    log::warn!("{strategy} loop for {size} grid is malformed, using the default rectangle");
    (LoopStrategy::Edge, default_rectangle(size))
}

/// The perimeter of the grid, clockwise from the source corner.
pub(crate) fn default_rectangle(size: GridSize) -> LoopPath {
    let (last_row, last_col) = (size.rows() - 1, size.cols() - 1);
    let top = (0..last_col).map(|col| Position::new(0, col));
    let right = (0..last_row).map(|row| Position::new(row, last_col));
    let bottom = (1..=last_col).rev().map(|col| Position::new(last_row, col));
    let left = (1..=last_row).rev().map(|row| Position::new(row, 0));
    LoopPath::from_cells(top.chain(right).chain(bottom).chain(left).collect())
}

/// Walks along the outer wall from the source until it returns home.
///
/// The walk moves straight while it can and otherwise turns by `turn`
/// quarter turns (1 for clockwise, 3 for counter-clockwise).
fn wall_follow(size: GridSize, heading: Direction, turn: u8) -> LoopPath {
    let start = size.source();
    let limit = 2 * (size.rows() + size.cols());
    let mut cells = vec![start];
    let mut pos = start;
    let mut heading = heading;
    while cells.len() <= limit {
        let next = (0..4).find_map(|_| {
            let next = pos.neighbor(heading, size.rows(), size.cols());
            if next.is_none() {
                heading = heading.rotated_cw(turn);
            }
            next
        });
        let Some(next) = next else {
            break;
        };
        if next == start {
            return LoopPath::from_cells(cells);
        }
        cells.push(next);
        pos = next;
    }
    LoopPath::from_cells(Vec::new())
}

/// Two disjoint monotone staircases from the source to the bulb.
///
/// The upper staircase starts rightwards and ends downwards. The lower one
/// starts downwards and ends rightwards, and stays strictly below the upper
/// one in every column they share. The loop walks the upper staircase to
/// the bulb and the lower one back to the source.
fn staircase(size: GridSize, rng: &mut Pcg64) -> LoopPath {
    let (rows, cols) = (size.rows(), size.cols());
    let last_row = rows - 1;

    // upper[c] and lower[c] are the rows at which each staircase leaves
    // column c.
    let mut upper = vec![0; cols];
    for c in 1..cols - 1 {
        upper[c] = rng.random_range(upper[c - 1]..=last_row - 1);
    }
    upper[cols - 1] = last_row;

    let mut lower = vec![last_row; cols];
    for c in 0..cols.saturating_sub(2) {
        let floor = if c == 0 { 1 } else { lower[c - 1] };
        let floor = floor.max(upper[c + 1] + 1);
        lower[c] = rng.random_range(floor..=last_row);
    }

    let upper = trace_columns(&upper);
    let lower = trace_columns(&lower);

    let mut seen = HashSet::new();
    let cells = upper
        .into_iter()
        .chain(lower.into_iter().rev())
        .filter(|pos| seen.insert(*pos))
        .collect();
    LoopPath::from_cells(cells)
}

/// Expands per-column exit rows into the cells of a monotone path from the
/// top-left corner.
fn trace_columns(exits: &[usize]) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut row = 0;
    for (col, &exit) in exits.iter().enumerate() {
        cells.extend((row..=exit).map(|r| Position::new(r, col)));
        row = exit;
    }
    cells
}
