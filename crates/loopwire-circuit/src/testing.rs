//! Test utilities for propagation and evaluation.
//!
//! [`CircuitTester`] holds a grid, applies moves to it and checks the
//! evaluated circuit after each one.

use std::str::FromStr as _;

use loopwire_core::{Cell, Grid, Piece, Position};

use crate::{CircuitState, evaluate};

/// A fluent harness around a grid and its evaluated circuit.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct CircuitTester<P = Cell> {
    grid: Grid<P>,
    state: CircuitState,
}

impl CircuitTester<Cell> {
    /// Creates a tester from a grid in text notation.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = Grid::<Cell>::from_str(s).unwrap();
        Self::new(grid)
    }
}

impl<P> CircuitTester<P>
where
    P: Piece,
{
    /// Creates a tester and evaluates the initial grid.
    pub fn new(grid: Grid<P>) -> Self {
        let state = evaluate(&grid);
        Self { grid, state }
    }

    /// Turns the piece at `pos` once and re-evaluates.
    #[track_caller]
    pub fn turn(mut self, pos: Position) -> Self {
        let turned = self.grid[pos].turned();
        self.grid = self.grid.replace(pos, turned);
        self.state = evaluate(&self.grid);
        self
    }

    /// Turns the piece at `pos` `times` times.
    #[track_caller]
    pub fn turn_times(self, pos: Position, times: usize) -> Self {
        (0..times).fold(self, |tester, _| tester.turn(pos))
    }

    /// Asserts that every listed cell carries power.
    ///
    /// # Panics
    ///
    /// Panics if any of the cells is unpowered.
    #[track_caller]
    pub fn assert_powered<I>(self, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        for pos in positions {
            assert!(
                self.state.powered.is_powered(pos),
                "Expected {pos} to be powered"
            );
        }
        self
    }

    /// Asserts that none of the listed cells carries power.
    ///
    /// # Panics
    ///
    /// Panics if any of the cells is powered.
    #[track_caller]
    pub fn assert_unpowered<I>(self, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        for pos in positions {
            assert!(
                !self.state.powered.is_powered(pos),
                "Expected {pos} to be unpowered"
            );
        }
        self
    }

    /// Asserts the total number of powered cells.
    ///
    /// A bridge counts once even when both of its paths are powered.
    ///
    /// # Panics
    ///
    /// Panics if the count differs from `expected`.
    #[track_caller]
    pub fn assert_powered_count(self, expected: usize) -> Self {
        let actual = self.state.powered.powered_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} powered cell(s), but found {actual}"
        );
        self
    }

    /// Asserts that every bulb sits on a closed circuit.
    ///
    /// # Panics
    ///
    /// Panics if the circuit is not solved.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert!(self.state.solved, "Expected the circuit to be solved");
        self
    }

    /// Asserts that the circuit is not solved.
    ///
    /// # Panics
    ///
    /// Panics if the circuit is solved.
    #[track_caller]
    pub fn assert_not_solved(self) -> Self {
        assert!(!self.state.solved, "Expected the circuit not to be solved");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_turning_a_corner_opens_and_closes_the_ring() {
        CircuitTester::from_str(
            "
            L1s I1 L1
            I0  .  I0
            L0  I1 L3b
            ",
        )
        .assert_not_solved()
        .assert_powered([p(0, 2), p(1, 2), p(2, 2)])
        .assert_unpowered([p(1, 1)])
        .assert_powered_count(8)
        .turn(p(0, 2))
        .assert_solved()
        .assert_powered_count(8)
        .turn(p(0, 2))
        .assert_not_solved()
        .turn_times(p(0, 2), 3)
        .assert_solved();
    }

    #[test]
    fn test_fixed_pieces_ignore_turns() {
        CircuitTester::from_str(
            "
            L1s! L2
            L0   L3b
            ",
        )
        .assert_solved()
        .turn(p(0, 0))
        .assert_solved()
        .assert_powered([p(0, 0), p(0, 1), p(1, 0), p(1, 1)]);
    }
}
