use std::str::FromStr;

use loopwire_core::Position;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Rotate(Position),
    Undo,
    Redo,
    Restart,
    NewPuzzle,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {word:?}")]
    Unknown { word: String },
    #[display("rotate needs a row and a column")]
    MissingCoordinate,
    #[display("invalid coordinate {text:?}")]
    InvalidCoordinate { text: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or(ParseCommandError::Empty)?;
        let command = match word.to_ascii_lowercase().as_str() {
            "r" | "rotate" => {
                let row = coordinate(words.next())?;
                let col = coordinate(words.next())?;
                Self::Rotate(Position::new(row, col))
            }
            "u" | "undo" => Self::Undo,
            "y" | "redo" => Self::Redo,
            "restart" => Self::Restart,
            "n" | "new" => Self::NewPuzzle,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                return Err(ParseCommandError::Unknown {
                    word: word.to_owned(),
                });
            }
        };
        Ok(command)
    }
}

fn coordinate(word: Option<&str>) -> Result<usize, ParseCommandError> {
    let text = word.ok_or(ParseCommandError::MissingCoordinate)?;
    text.parse()
        .map_err(|_| ParseCommandError::InvalidCoordinate {
            text: text.to_owned(),
        })
}

pub(crate) const HELP: &str = "\
commands:
  r ROW COL   rotate the piece at ROW, COL a quarter turn clockwise
  u           undo the last move
  y           redo an undone move
  restart     go back to the opening position
  n           start a new puzzle
  h           show this help
  q           quit";
