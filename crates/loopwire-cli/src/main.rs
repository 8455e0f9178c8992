//! Loopwire terminal front-end.
//!
//! Generates a puzzle, draws it with box-drawing characters and reads moves
//! from standard input until the player quits. Set `RUST_LOG=debug` to see
//! generator decisions.

use std::{
    io::{self, BufRead as _, Write as _},
    num::NonZero,
    process,
};

use clap::Parser;
use loopwire_core::Cell;
use loopwire_game::{GameError, Level, RotateOutcome, Session};
use loopwire_generator::{
    Difficulty, GeneratedPuzzle, GridSize, GridSizeError, LoopStrategy, PuzzleGenerator,
    PuzzleSeed,
};

use crate::command::{Command, HELP};

mod command;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the square grid.
    #[arg(long, value_name = "N", default_value_t = 5)]
    size: usize,

    /// Scramble strength: easy, medium or hard.
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Loop strategy: edge, inner or random. Picked per puzzle if omitted.
    #[arg(long, value_name = "KIND")]
    strategy: Option<LoopStrategy>,

    /// Seed of the first puzzle, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase hashed into the seed of the first puzzle.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of positions kept for undo.
    #[arg(long, value_name = "COUNT", default_value_t = Session::<Cell>::default_capacity())]
    history: NonZero<usize>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Size(GridSizeError),
    #[display("I/O error: {_0}")]
    Io(io::Error),
}

struct App {
    generator: PuzzleGenerator,
    size: GridSize,
    difficulty: Difficulty,
    history: NonZero<usize>,
    puzzle: GeneratedPuzzle,
    session: Session,
}

impl App {
    fn new(args: &Args) -> Result<Self, CliError> {
        let size = GridSize::square(args.size)?;
        let generator = args
            .strategy
            .map_or_else(PuzzleGenerator::new, PuzzleGenerator::with_strategy);
        let seed = args
            .seed
            .or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase))
            .unwrap_or_else(PuzzleSeed::random);
        let puzzle = generator.generate_with_seed(size, args.difficulty, seed);
        let session = Session::with_capacity(Level::from_puzzle(&puzzle), args.history);
        Ok(Self {
            generator,
            size,
            difficulty: args.difficulty,
            history: args.history,
            puzzle,
            session,
        })
    }

    fn new_puzzle(&mut self) {
        self.puzzle = self.generator.generate(self.size, self.difficulty);
        self.session = Session::with_capacity(Level::from_puzzle(&self.puzzle), self.history);
    }

    fn show(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(
            out,
            "seed {} ({} loop, {})",
            self.puzzle.seed, self.puzzle.strategy, self.puzzle.difficulty
        )?;
        write!(out, "{}", render::render(self.session.level()))?;
        if self.session.level().is_solved() {
            writeln!(out, "solved in {} move(s)!", self.session.moves())?;
        }
        Ok(())
    }

    /// Applies one command. Returns `false` when the player quits.
    fn apply(&mut self, command: Command, out: &mut impl io::Write) -> io::Result<bool> {
        log::debug!("command: {command:?}");
        match command {
            Command::Rotate(pos) => match self.session.rotate(pos) {
                Ok(RotateOutcome::Rotated) => self.show(out)?,
                Ok(RotateOutcome::Unchanged) => writeln!(out, "the piece at {pos} is fixed")?,
                Err(err @ GameError::OutOfBounds { .. }) => writeln!(out, "{err}")?,
            },
            Command::Undo => {
                if self.session.undo() {
                    self.show(out)?;
                } else {
                    writeln!(out, "nothing to undo")?;
                }
            }
            Command::Redo => {
                if self.session.redo() {
                    self.show(out)?;
                } else {
                    writeln!(out, "nothing to redo")?;
                }
            }
            Command::Restart => {
                self.session.restart();
                self.show(out)?;
            }
            Command::NewPuzzle => {
                self.new_puzzle();
                self.show(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut app = App::new(args)?;
    log::info!("starting {} puzzle with seed {}", app.size, app.puzzle.seed);

    let mut out = io::stdout().lock();
    app.show(&mut out)?;
    writeln!(out, "type h for help")?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !app.apply(command, &mut out)? {
                    break;
                }
            }
            Err(err) => writeln!(out, "{err}; type h for help")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
