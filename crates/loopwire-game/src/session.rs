use std::num::NonZero;

use loopwire_core::{Cell, Piece, Position};

use crate::{GameError, Level, undo_redo_stack::UndoRedoStack};

/// What a call to [`Session::rotate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RotateOutcome {
    /// The piece turned and a new snapshot was recorded.
    Rotated,
    /// The piece is fixed; nothing changed and no history was recorded.
    Unchanged,
}

/// A puzzle being played, with undo and redo.
///
/// Every effective rotation records a new [`Level`] snapshot. Undo and redo
/// move through the recorded snapshots; rotating after an undo discards the
/// redo branch. Once the history holds `capacity` snapshots the oldest one is
/// dropped.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Cell, Grid, Position};
/// use loopwire_game::{Level, Session};
///
/// let grid: Grid<Cell> = "
///     L1s L1
///     L0  L3b
/// "
/// .parse()
/// .unwrap();
/// let mut session = Session::new(Level::new(grid));
///
/// let corner = Position::new(0, 1);
/// assert!(session.rotate(corner).unwrap().is_rotated());
/// assert!(session.level().is_solved());
///
/// assert!(session.undo());
/// assert!(!session.level().is_solved());
/// assert!(session.redo());
/// assert_eq!(session.moves(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session<P = Cell> {
    initial: Level<P>,
    history: UndoRedoStack<Level<P>>,
}

impl<P> Session<P>
where
    P: Piece,
{
    /// Default number of snapshots kept in the history.
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(1000).unwrap()
    }

    /// Starts a session with the default history capacity.
    #[must_use]
    pub fn new(level: Level<P>) -> Self {
        Self::with_capacity(level, Self::default_capacity())
    }

    /// Starts a session that keeps at most `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(level: Level<P>, capacity: NonZero<usize>) -> Self {
        let mut history = UndoRedoStack::new(capacity);
        history.push(level.clone());
        Self {
            initial: level,
            history,
        }
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> &Level<P> {
        // The stack is seeded on construction and never emptied.
        self.history.current().unwrap_or(&self.initial)
    }

    /// Returns the history capacity.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.history.capacity()
    }

    /// Turns the piece at `pos` and records the result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid.
    pub fn rotate(&mut self, pos: Position) -> Result<RotateOutcome, GameError> {
        let level = self.level();
        if level.is_fixed(pos)? {
            return Ok(RotateOutcome::Unchanged);
        }
        let next = level.rotate_cell(pos)?;
        self.history.push(next);
        Ok(RotateOutcome::Rotated)
    }

    /// Returns `true` if there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Steps back one move. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Returns `true` if there is an undone move to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Re-applies one undone move. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Returns the number of moves between the oldest recorded snapshot and
    /// the current one.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.cursor()
    }

    /// Returns to the opening level and clears the history.
    pub fn restart(&mut self) {
        self.history.reset(self.initial.clone());
    }
}
