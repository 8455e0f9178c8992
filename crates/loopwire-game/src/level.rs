use loopwire_circuit::{CircuitState, PoweredMatrix, evaluate};
use loopwire_core::{Cell, Grid, Piece, Position};
use loopwire_generator::GeneratedPuzzle;

use crate::GameError;

/// An immutable snapshot of a puzzle in play.
///
/// A level pairs a grid with its evaluated circuit. Moves never modify a
/// level in place: [`rotate_cell`](Self::rotate_cell) returns a new
/// snapshot with the power and solved state already recomputed, so older
/// snapshots stay valid for history.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Cell, Grid, Position};
/// use loopwire_game::Level;
///
/// let grid: Grid<Cell> = "
///     L1s L1
///     L0  L3b
/// "
/// .parse()
/// .unwrap();
/// let level = Level::new(grid);
/// assert!(!level.is_solved());
///
/// let next = level.rotate_cell(Position::new(0, 1)).unwrap();
/// assert!(next.is_solved());
/// assert!(!level.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level<P = Cell> {
    grid: Grid<P>,
    state: CircuitState,
}

impl Level<Cell> {
    /// Creates the opening level of a generated puzzle.
    #[must_use]
    pub fn from_puzzle(puzzle: &GeneratedPuzzle) -> Self {
        Self::new(puzzle.grid.clone())
    }
}

impl<P> Level<P>
where
    P: Piece,
{
    /// Creates a level and evaluates its circuit.
    #[must_use]
    pub fn new(grid: Grid<P>) -> Self {
        let state = evaluate(&grid);
        Self { grid, state }
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<P> {
        &self.grid
    }

    /// Returns which cells carry power.
    #[must_use]
    pub fn powered(&self) -> &PoweredMatrix {
        &self.state.powered
    }

    /// Returns `true` if the cell at `pos` carries power.
    #[must_use]
    pub fn is_powered(&self, pos: Position) -> bool {
        self.state.powered.is_powered(pos)
    }

    /// Returns `true` if every bulb sits on a closed circuit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.solved
    }

    /// Returns `true` if the piece at `pos` cannot be turned.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid.
    pub fn is_fixed(&self, pos: Position) -> Result<bool, GameError> {
        Ok(self.piece(pos)?.is_fixed())
    }

    /// Returns a new level with the piece at `pos` turned once.
    ///
    /// Turning a fixed piece, a blocker or an empty cell yields a level equal
    /// to this one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid.
    pub fn rotate_cell(&self, pos: Position) -> Result<Self, GameError> {
        let piece = self.piece(pos)?;
        if piece.is_fixed() {
            return Ok(self.clone());
        }
        Ok(Self::new(self.grid.replace(pos, piece.turned())))
    }

    fn piece(&self, pos: Position) -> Result<&P, GameError> {
        self.grid.get(pos).ok_or(GameError::OutOfBounds {
            position: pos,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
        })
    }
}

#[cfg(test)]
mod tests {
    use loopwire_core::{DirectionSet, Rotation, Shape, Tile, TileId};
    use loopwire_generator::{Difficulty, GridSize, PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn level(s: &str) -> Level {
        Level::new(s.parse().unwrap())
    }

    #[test]
    fn test_rotate_returns_new_snapshot() {
        let before = level(
            "
            L1s I0
            I1  L3b
            ",
        );
        let pos = Position::new(0, 1);
        let after = before.rotate_cell(pos).unwrap();

        assert_eq!(before.grid()[pos].rotation, Rotation::R0);
        assert_eq!(after.grid()[pos].rotation, Rotation::R90);
        assert!(after.is_powered(pos));
        assert!(!before.is_powered(pos));
    }

    #[test]
    fn test_rotating_fixed_or_empty_cell_is_noop() {
        let before = level(
            "
            L1s! .
            L0   L3b
            ",
        );
        assert_eq!(before.rotate_cell(Position::new(0, 0)).unwrap(), before);
        assert_eq!(before.rotate_cell(Position::new(0, 1)).unwrap(), before);
        assert!(before.is_fixed(Position::new(0, 0)).unwrap());
        assert!(!before.is_fixed(Position::new(1, 0)).unwrap());
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let level = level("L1s L3b");
        let pos = Position::new(1, 0);
        assert_eq!(
            level.rotate_cell(pos),
            Err(GameError::OutOfBounds {
                position: pos,
                rows: 1,
                cols: 2
            })
        );
        assert_eq!(
            level.rotate_cell(pos).unwrap_err().to_string(),
            "position (1, 0) is outside the 1x2 grid"
        );
    }

    #[test]
    fn test_four_turns_restore_the_level() {
        let start = level(
            "
            L1s T2 L2
            I0  X0 I0
            L0  I1 L3b
            ",
        );
        let pos = Position::new(0, 1);
        let mut current = start.clone();
        for _ in 0..4 {
            current = current.rotate_cell(pos).unwrap();
        }
        assert_eq!(current, start);
    }

    #[test]
    fn test_solving_a_generated_puzzle() {
        let puzzle = PuzzleGenerator::new().generate_with_seed(
            GridSize::new(4, 5).unwrap(),
            Difficulty::Hard,
            PuzzleSeed::from_phrase("level"),
        );
        let mut level = Level::from_puzzle(&puzzle);
        assert!(!level.is_solved());
        for (pos, offset) in puzzle.scramble.iter() {
            for _ in 0..offset.inverse().quarter_turns() {
                level = level.rotate_cell(pos).unwrap();
            }
        }
        assert!(level.is_solved());
        assert_eq!(level.grid(), &puzzle.solved_grid());
    }

    #[test]
    fn test_switch_tiles_toggle() {
        let grid = Grid::from_rows(vec![vec![
            Tile::source(TileId(0), DirectionSet::RIGHT),
            Tile::switch(
                TileId(1),
                DirectionSet::TOP,
                DirectionSet::LEFT | DirectionSet::RIGHT,
            ),
            Tile::wire(TileId(2), Shape::I, Rotation::R90),
        ]])
        .unwrap();
        let level = Level::new(grid);
        let end = Position::new(0, 2);
        assert!(!level.is_powered(end));
        let toggled = level.rotate_cell(Position::new(0, 1)).unwrap();
        assert!(toggled.is_powered(end));
        let back = toggled.rotate_cell(Position::new(0, 1)).unwrap();
        assert_eq!(back, level);
    }
}
