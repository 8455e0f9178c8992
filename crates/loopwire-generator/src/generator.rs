use loopwire_circuit::evaluate;
use loopwire_core::{Cell, Grid, Position, Role, Rotation, Shape};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::{Difficulty, GridSize, LoopPath, LoopStrategy, PuzzleSeed, loop_path};

/// A generated puzzle along with the data needed to reproduce and solve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed used for generation.
    pub seed: PuzzleSeed,
    /// The grid dimensions.
    pub size: GridSize,
    /// The difficulty that scaled the scramble.
    pub difficulty: Difficulty,
    /// The strategy that built the loop, after any fallback.
    pub strategy: LoopStrategy,
    /// The designed loop from the source through the bulb and back.
    pub loop_path: LoopPath,
    /// The designed rotation of every cell.
    pub solution: Grid<Rotation>,
    /// The offset that was added to every designed rotation.
    pub scramble: Grid<Rotation>,
    /// The scrambled grid handed to the player.
    pub grid: Grid<Cell>,
}

impl GeneratedPuzzle {
    /// Returns the grid with every cell turned back to its designed rotation.
    #[must_use]
    pub fn solved_grid(&self) -> Grid<Cell> {
        self.grid.map(|pos, cell| cell.with_rotation(self.solution[pos]))
    }
}

/// Generates rotate-only puzzles around a designed closed loop.
///
/// Every puzzle places the source in the top-left corner and the bulb in the
/// bottom-right corner, lays a closed loop through both, fills the remaining
/// cells with decorative pieces and then turns every piece away from its
/// designed rotation.
///
/// # Examples
///
/// ```
/// use loopwire_circuit::evaluate;
/// use loopwire_generator::{Difficulty, GridSize, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let size = GridSize::square(5).unwrap();
/// let seed = PuzzleSeed::from_phrase("example");
/// let puzzle = generator.generate_with_seed(size, Difficulty::Medium, seed);
///
/// assert!(!evaluate(&puzzle.grid).solved);
/// assert!(evaluate(&puzzle.solved_grid()).solved);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    strategy: Option<LoopStrategy>,
}

impl PuzzleGenerator {
    /// Creates a generator that picks a loop strategy at random per puzzle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that always uses `strategy`.
    #[must_use]
    pub fn with_strategy(strategy: LoopStrategy) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self, size: GridSize, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(size, difficulty, PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from `seed`.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        size: GridSize,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());

        let requested = self
            .strategy
            .unwrap_or_else(|| LoopStrategy::ALL[rng.random_range(0..LoopStrategy::ALL.len())]);
        log::debug!("generating {size} {difficulty} puzzle with {requested} loop");
        let (strategy, loop_path) = loop_path::build(requested, size, &mut rng);

        let designed = lay_out(size, &loop_path, &mut rng);
        let solution = designed.map(|_, cell| cell.rotation);
        let mut scramble = designed.map(|_, _| {
            Rotation::from_quarter_turns(rng.random_range(difficulty.scramble_range()))
        });
        let mut grid =
            designed.map(|pos, cell| cell.with_rotation(cell.rotation.turned_by(scramble[pos])));

        ensure_unsolved(&loop_path, &mut grid, &mut scramble);

        GeneratedPuzzle {
            seed,
            size,
            difficulty,
            strategy,
            loop_path,
            solution,
            scramble,
            grid,
        }
    }
}

/// Builds the solved grid: loop cells realize their required sides, every
/// other cell gets a random decorative piece.
fn lay_out(size: GridSize, loop_path: &LoopPath, rng: &mut Pcg64) -> Grid<Cell> {
    let mut index = Grid::filled(size.rows(), size.cols(), None);
    for (i, pos) in loop_path.cells().iter().enumerate() {
        index[*pos] = Some(i);
    }

    Grid::from_fn(size.rows(), size.cols(), |pos| {
        let Some(i) = index[pos] else {
            let shape = Shape::DECORATIVE[rng.random_range(0..Shape::DECORATIVE.len())];
            let rotation = Rotation::from_quarter_turns(rng.random_range(0..4));
            return Cell::new(shape, rotation);
        };
        let (shape, rotation) =
            Shape::realizing(loop_path.required_directions(i)).unwrap_or_default();
        let role = if pos == size.source() {
            Role::Source
        } else if pos == size.bulb() {
            Role::Bulb
        } else {
            Role::Plain
        };
        Cell::new(shape, rotation).with_role(role)
    })
}

/// Turns loop corners one extra quarter turn until the grid is unsolved.
///
/// A scramble can land every loop piece back on its designed rotation, most
/// often on small grids or with full-turn draws at `Hard`.
fn ensure_unsolved(
    loop_path: &LoopPath,
    grid: &mut Grid<Cell>,
    scramble: &mut Grid<Rotation>,
) {
    let corners: Vec<Position> = loop_path
        .cells()
        .iter()
        .copied()
        .filter(|pos| grid[*pos].shape == Shape::L)
        .collect();
    for pos in corners {
        if !evaluate(&*grid).solved {
            return;
        }
        log::debug!("scrambled grid is already solved, turning corner {pos}");
        scramble[pos] = scramble[pos].turned_cw();
        grid[pos] = grid[pos].with_rotation(grid[pos].rotation.turned_cw());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use loopwire_circuit::propagate;
    use proptest::prelude::*;

    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn edge_puzzle(seed: &str) -> GeneratedPuzzle {
        PuzzleGenerator::with_strategy(LoopStrategy::Edge).generate_with_seed(
            GridSize::square(3).unwrap(),
            Difficulty::Medium,
            PuzzleSeed::from_phrase(seed),
        )
    }

    #[test]
    fn test_three_by_three_edge_loop_end_to_end() {
        let puzzle = edge_puzzle("end-to-end");
        assert_eq!(puzzle.strategy, LoopStrategy::Edge);
        assert_eq!(
            puzzle.loop_path.cells(),
            &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2), p(2, 1), p(2, 0), p(1, 0)]
        );
        assert!(!puzzle.loop_path.contains(p(1, 1)));
        assert!(puzzle.grid[p(0, 0)].is_source());
        assert!(puzzle.grid[p(2, 2)].is_bulb());

        assert!(!evaluate(&puzzle.grid).solved);
        let solved = puzzle.solved_grid();
        assert!(evaluate(&solved).solved);

        // Any single loop piece left pointing the wrong way breaks the circuit.
        for &pos in puzzle.loop_path.cells() {
            let designed = solved[pos];
            for rotation in Rotation::ALL {
                let wrong = designed.with_rotation(rotation);
                if wrong.connections() == designed.connections() {
                    continue;
                }
                let grid = solved.replace(pos, wrong);
                assert!(!evaluate(&grid).solved, "{pos} at {rotation} still solves");
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = PuzzleGenerator::new();
        let size = GridSize::new(4, 6).unwrap();
        let seed = PuzzleSeed::from_phrase("repeat");
        assert_eq!(
            generator.generate_with_seed(size, Difficulty::Hard, seed),
            generator.generate_with_seed(size, Difficulty::Hard, seed)
        );
    }

    #[test]
    fn test_loop_pieces_have_exact_shapes() {
        let puzzle = edge_puzzle("shapes");
        let solved = puzzle.solved_grid();
        for (i, &pos) in puzzle.loop_path.cells().iter().enumerate() {
            assert_eq!(
                solved[pos].connections(),
                puzzle.loop_path.required_directions(i)
            );
        }
        // Corners of the perimeter are L pieces, edges are I pieces.
        assert_eq!(solved[p(0, 2)].shape, Shape::L);
        assert_eq!(solved[p(1, 0)].shape, Shape::I);
    }

    #[test]
    fn test_small_grids_always_start_unsolved() {
        let generator = PuzzleGenerator::new();
        let size = GridSize::square(2).unwrap();
        for i in 0..200 {
            let seed = PuzzleSeed::from_phrase(&i.to_string());
            let puzzle = generator.generate_with_seed(size, Difficulty::Hard, seed);
            assert!(!evaluate(&puzzle.grid).solved, "seed {seed} spawned solved");
        }
    }

    proptest! {
        #[test]
        fn prop_generated_puzzles_are_solvable(
            rows in 2usize..10,
            cols in 2usize..10,
            seed in any::<[u8; 32]>(),
            difficulty in prop::sample::select(Difficulty::ALL.to_vec()),
        ) {
            let size = GridSize::new(rows, cols).unwrap();
            let puzzle =
                PuzzleGenerator::new().generate_with_seed(size, difficulty, seed.into());

            let with_role = |role: Role| -> HashSet<Position> {
                puzzle
                    .grid
                    .iter()
                    .filter(|(_, cell)| cell.role == role)
                    .map(|(pos, _)| pos)
                    .collect()
            };
            let sources = with_role(Role::Source);
            let bulbs = with_role(Role::Bulb);
            prop_assert_eq!(sources, HashSet::from([size.source()]));
            prop_assert_eq!(bulbs, HashSet::from([size.bulb()]));

            prop_assert!(!evaluate(&puzzle.grid).solved);
            let solved = puzzle.solved_grid();
            prop_assert!(evaluate(&solved).solved);
            let powered = propagate(&solved);
            for &pos in puzzle.loop_path.cells() {
                prop_assert!(powered.is_powered(pos));
            }
        }

        #[test]
        fn prop_grid_is_solution_plus_scramble(
            size in 2usize..8,
            seed in any::<[u8; 32]>(),
            difficulty in prop::sample::select(Difficulty::ALL.to_vec()),
        ) {
            let size = GridSize::square(size).unwrap();
            let puzzle =
                PuzzleGenerator::new().generate_with_seed(size, difficulty, seed.into());
            for (pos, cell) in puzzle.grid.iter() {
                prop_assert_eq!(
                    cell.rotation,
                    puzzle.solution[pos].turned_by(puzzle.scramble[pos])
                );
                prop_assert_ne!(cell.shape, Shape::Empty);
            }
        }
    }
}
