use loopwire_core::{Grid, Piece, Position, channel_link};

use crate::{PoweredMatrix, propagation};

/// Powered links a bulb needs to count as part of a closed circuit.
pub const MIN_BULB_LINKS: usize = 2;

/// The result of evaluating a grid after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitState {
    /// Which cells carry power.
    pub powered: PoweredMatrix,
    /// Whether every bulb sits on a closed circuit.
    pub solved: bool,
}

/// Propagates power through `grid` and evaluates the solved state.
#[must_use]
pub fn evaluate<P: Piece>(grid: &Grid<P>) -> CircuitState {
    let powered = propagation::propagate(grid);
    let solved = is_solved(grid, &powered);
    CircuitState { powered, solved }
}

/// Counts the powered mutual connections of the bulb at `bulb`.
///
/// A link counts when the bulb's channel is open towards a neighbor, the
/// neighbor has the reciprocal opening, and both ends are powered.
/// Out-of-bounds sides never count.
#[must_use]
pub fn bulb_links<P: Piece>(grid: &Grid<P>, powered: &PoweredMatrix, bulb: Position) -> usize {
    links_where(grid, bulb, |ch| powered.is_channel_powered(bulb, ch), powered)
}

/// Returns `true` if every bulb in `grid` sits on a closed circuit.
///
/// For each bulb:
///
/// 1. the bulb must be powered;
/// 2. it must have at least [`MIN_BULB_LINKS`] powered mutual connections;
/// 3. at least [`MIN_BULB_LINKS`] of those neighbors must still be reachable
///    from a source when the bulb itself is removed. This rejects dead-end
///    branches that are only powered *through* the bulb, so the bulb lies on
///    a cycle of the powered circuit.
///
/// A grid without any bulb is never solved.
///
/// # Examples
///
/// ```
/// use loopwire_circuit::{is_solved, propagate};
/// use loopwire_core::{Cell, Grid};
///
/// // The bulb is reached, but the current has no way back.
/// let grid: Grid<Cell> = "
///     L1s L2
///     .   I0b
/// "
/// .parse()
/// .unwrap();
/// assert!(!is_solved(&grid, &propagate(&grid)));
/// ```
#[must_use]
pub fn is_solved<P: Piece>(grid: &Grid<P>, powered: &PoweredMatrix) -> bool {
    let mut bulbs = grid
        .iter()
        .filter(|(_, piece)| piece.role().is_bulb())
        .map(|(pos, _)| pos)
        .peekable();
    if bulbs.peek().is_none() {
        return false;
    }
    bulbs.all(|bulb| is_bulb_closed(grid, powered, bulb))
}

fn is_bulb_closed<P: Piece>(grid: &Grid<P>, powered: &PoweredMatrix, bulb: Position) -> bool {
    if !powered.is_powered(bulb) {
        return false;
    }
    if bulb_links(grid, powered, bulb) < MIN_BULB_LINKS {
        return false;
    }
    // Every link must still see power with the bulb taken out of the circuit.
    let bypass = propagation::flood(grid, Some(bulb));
    links_where(grid, bulb, |_| true, &bypass) >= MIN_BULB_LINKS
}

fn links_where<P, F>(
    grid: &Grid<P>,
    bulb: Position,
    bulb_channel_ok: F,
    matrix: &PoweredMatrix,
) -> usize
where
    P: Piece,
    F: Fn(usize) -> bool,
{
    let piece = &grid[bulb];
    piece
        .channels()
        .iter()
        .enumerate()
        .filter(|(ch, _)| bulb_channel_ok(*ch))
        .flat_map(|(ch, open)| open.directions().map(move |d| (ch, d)))
        .filter(|(ch, direction)| {
            grid.neighbor(bulb, *direction).is_some_and(|next| {
                channel_link(piece, *ch, &grid[next], *direction)
                    .is_some_and(|next_ch| matrix.is_channel_powered(next, next_ch))
            })
        })
        .count()
}
