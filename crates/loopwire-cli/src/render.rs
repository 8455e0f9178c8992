//! Box-drawing rendering of a level.
//!
//! Each cell is drawn as the glyph of its open sides, heavy when powered and
//! light otherwise, followed by a role marker (`s` source, `b` bulb).

use loopwire_core::{Cell, DirectionSet, Position, Role};
use loopwire_game::Level;

const LIGHT: [char; 16] = [
    '·', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
];
const HEAVY: [char; 16] = [
    '·', '╹', '╺', '┗', '╻', '┃', '┏', '┣', '╸', '┛', '━', '┻', '┓', '┫', '┳', '╋',
];

fn glyph(open: DirectionSet, powered: bool) -> char {
    let table = if powered { &HEAVY } else { &LIGHT };
    table[usize::from(open.bits())]
}

fn marker(cell: &Cell) -> char {
    match cell.role {
        Role::Source => 's',
        Role::Bulb => 'b',
        Role::Plain if cell.fixed => '!',
        Role::Plain => ' ',
    }
}

/// Draws `level` with row and column indices.
pub(crate) fn render(level: &Level) -> String {
    let grid = level.grid();
    let mut out = String::from("   ");
    for col in 0..grid.cols() {
        out.push_str(&format!("{:<2}", col % 100));
    }
    out.push('\n');
    for row in 0..grid.rows() {
        out.push_str(&format!("{row:>2} "));
        for (col, cell) in grid.row(row).iter().enumerate() {
            let powered = level.is_powered(Position::new(row, col));
            out.push(glyph(cell.connections(), powered));
            out.push(marker(cell));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use loopwire_core::Grid;

    use super::*;

    #[test]
    fn test_glyph_tables_follow_direction_bits() {
        let corner = DirectionSet::RIGHT | DirectionSet::BOTTOM;
        assert_eq!(glyph(corner, false), '┌');
        assert_eq!(glyph(corner, true), '┏');
        assert_eq!(glyph(DirectionSet::all(), true), '╋');
        assert_eq!(glyph(DirectionSet::empty(), false), '·');
    }

    #[test]
    fn test_render_marks_power_and_roles() {
        let grid: Grid<Cell> = "
            L1s L2
            I1  L3b
        "
        .parse()
        .unwrap();
        let text = render(&Level::new(grid));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "   0 1 ");
        assert_eq!(lines[1], " 0 ┏s┓ ");
        assert_eq!(lines[2], " 1 ━ ┛b");
    }
}
