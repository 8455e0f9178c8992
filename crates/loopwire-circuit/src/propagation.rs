use std::collections::VecDeque;

use loopwire_core::{Grid, Piece, Position, channel_link};

use crate::PoweredMatrix;

/// Floods power breadth-first from every source cell.
///
/// All sources are seeded at once. From each powered channel the search
/// follows every open side to the neighbor, skipping sides that leave the
/// grid, and powers the neighbor's channel if the two pieces are mutually
/// connected. Each `(cell, channel)` pair is enqueued at most once, so the
/// work is linear in the grid size.
///
/// A grid without sources yields an all-unpowered matrix.
///
/// # Examples
///
/// ```
/// use loopwire_circuit::propagate;
/// use loopwire_core::{Cell, Grid, Position};
///
/// let grid: Grid<Cell> = "L1s I1 I0".parse().unwrap();
/// let powered = propagate(&grid);
/// assert!(powered.is_powered(Position::new(0, 1)));
/// assert!(!powered.is_powered(Position::new(0, 2)));
/// ```
#[must_use]
pub fn propagate<P: Piece>(grid: &Grid<P>) -> PoweredMatrix {
    flood(grid, None)
}

/// Propagation that treats `blocked` (if any) as absent from the grid.
pub(crate) fn flood<P: Piece>(grid: &Grid<P>, blocked: Option<Position>) -> PoweredMatrix {
    flood_counting_visits(grid, blocked).0
}

/// Like [`flood`], also returning how many `(cell, channel)` nodes were dequeued.
fn flood_counting_visits<P: Piece>(
    grid: &Grid<P>,
    blocked: Option<Position>,
) -> (PoweredMatrix, usize) {
    let mut powered = PoweredMatrix::unpowered(grid.rows(), grid.cols());
    let mut queue = VecDeque::new();

    let mut sources = 0;
    for (pos, piece) in grid.iter() {
        if !piece.role().is_source() || Some(pos) == blocked {
            continue;
        }
        sources += 1;
        let channels = piece.channels();
        powered.seed(pos, channels.len());
        queue.extend((0..channels.len()).map(|ch| (pos, ch)));
    }

    let mut visits = 0;
    while let Some((pos, channel)) = queue.pop_front() {
        visits += 1;
        let piece = &grid[pos];
        let Some(open) = piece.channels().get(channel).copied() else {
            continue;
        };
        for direction in open.directions() {
            let Some(next) = grid.neighbor(pos, direction) else {
                continue;
            };
            if Some(next) == blocked {
                continue;
            }
            let Some(next_channel) = channel_link(piece, channel, &grid[next], direction) else {
                continue;
            };
            if powered.power(next, next_channel) {
                queue.push_back((next, next_channel));
            }
        }
    }

    log::trace!(
        "propagated power from {sources} source(s) to {} of {} cell(s) in {visits} step(s)",
        powered.powered_count(),
        grid.len()
    );
    (powered, visits)
}
