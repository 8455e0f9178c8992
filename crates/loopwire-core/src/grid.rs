//! Rectangular grid container.

use std::ops::{Index, IndexMut};

use crate::{Direction, Position};

/// A rectangular, row-major mapping from [`Position`] to values.
///
/// The dimensions are fixed at construction. Indexing with an out-of-bounds
/// position panics; use [`get`](Self::get) for a checked lookup.
///
/// # Examples
///
/// ```
/// use loopwire_core::{Direction, Grid, Position};
///
/// let grid = Grid::from_fn(2, 3, |pos| pos.row * 10 + pos.col);
/// assert_eq!(grid[Position::new(1, 2)], 12);
/// assert_eq!(grid.neighbor(Position::new(0, 2), Direction::Right), None);
///
/// let updated = grid.replace(Position::new(0, 0), 99);
/// assert_eq!(updated[Position::new(0, 0)], 99);
/// assert_eq!(grid[Position::new(0, 0)], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid by calling `f` for every position in row-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();
        Self { rows, cols, cells }
    }

    /// Creates a grid from row vectors.
    ///
    /// Returns `None` if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the value at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if it is
    /// out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.offset(pos).map(|i| &mut self.cells[i])
    }

    /// Returns the neighbor of `pos` in `direction`, if it is inside the grid.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.neighbor(direction, self.rows, self.cols)
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Iterates over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(&self.cells)
    }

    /// Iterates over the values of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds");
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns a new grid with `f` applied to every value.
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Position, &T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter().map(|(pos, value)| f(pos, value)).collect(),
        }
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Returns a copy of the grid with the value at `pos` replaced.
    ///
    /// The original grid is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn replace(&self, pos: Position, value: T) -> Self {
        let mut next = self.clone();
        next[pos] = value;
        next
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, pos: Position) -> &T {
        match self.offset(pos) {
            Some(i) => &self.cells[i],
            None => panic!(
                "position {pos} out of bounds for {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        match self.offset(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!("position {pos} out of bounds for {rows}x{cols} grid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid = Grid::from_fn(2, 2, |pos| (pos.row, pos.col));
        let values: Vec<_> = grid.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.row(1), &[(1, 0), (1, 1)]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid[Position::new(1, 0)], 3);
    }

    #[test]
    fn test_checked_access() {
        let mut grid = Grid::filled(2, 3, 0);
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, 3)).is_none());
        *grid.get_mut(Position::new(1, 2)).unwrap() = 7;
        assert_eq!(grid[Position::new(1, 2)], 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::filled(2, 2, ());
        let () = grid[Position::new(2, 2)];
    }

    #[test]
    fn test_map_preserves_dimensions() {
        let grid = Grid::filled(3, 4, 1u8);
        let mapped = grid.map(|pos, v| usize::from(*v) + pos.col);
        assert_eq!((mapped.rows(), mapped.cols()), (3, 4));
        assert_eq!(mapped[Position::new(2, 3)], 4);
    }
}
