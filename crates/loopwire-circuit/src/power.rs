use loopwire_core::{Grid, Position};

/// Which cells (and which channels within them) carry power.
///
/// Each cell stores a bitmask with one bit per channel, so the two paths of
/// a bridge are powered independently. A cell counts as powered when any of
/// its channels is.
///
/// The matrix is derived state: it is recomputed from the grid on every
/// evaluation and never edited by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoweredMatrix {
    masks: Grid<u8>,
}

impl PoweredMatrix {
    /// Creates a matrix with no powered cells.
    #[must_use]
    pub fn unpowered(rows: usize, cols: usize) -> Self {
        Self {
            masks: Grid::filled(rows, cols, 0),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.masks.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.masks.cols()
    }

    /// Returns `true` if any channel of the cell at `pos` is powered.
    ///
    /// Out-of-bounds positions are never powered.
    #[must_use]
    pub fn is_powered(&self, pos: Position) -> bool {
        self.masks.get(pos).is_some_and(|mask| *mask != 0)
    }

    /// Returns `true` if the given channel of the cell at `pos` is powered.
    #[must_use]
    pub fn is_channel_powered(&self, pos: Position, channel: usize) -> bool {
        channel < 8 && self.masks.get(pos).is_some_and(|mask| mask & (1 << channel) != 0)
    }

    /// Returns the number of powered cells.
    #[must_use]
    pub fn powered_count(&self) -> usize {
        self.masks.iter().filter(|(_, mask)| **mask != 0).count()
    }

    /// Iterates over the powered positions in row-major order.
    pub fn powered_positions(&self) -> impl Iterator<Item = Position> {
        self.masks
            .iter()
            .filter(|(_, mask)| **mask != 0)
            .map(|(pos, _)| pos)
    }

    /// Returns the cell-level powered state as a boolean grid.
    #[must_use]
    pub fn to_bool_grid(&self) -> Grid<bool> {
        self.masks.map(|_, mask| *mask != 0)
    }

    /// Marks every channel of a source cell as powered.
    ///
    /// A source with no channels still counts as powered.
    pub(crate) fn seed(&mut self, pos: Position, channel_count: usize) {
        let mask = match channel_count {
            0 => 1,
            n => u8::MAX >> (8 - n.min(8)),
        };
        self.masks[pos] |= mask;
    }

    /// Powers one channel. Returns `true` if it was not powered before.
    pub(crate) fn power(&mut self, pos: Position, channel: usize) -> bool {
        let bit = 1 << channel;
        let mask = &mut self.masks[pos];
        let newly = *mask & bit == 0;
        *mask |= bit;
        newly
    }
}
