use super::types::{Mark, Position, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NoAvailableMoves,
    MalformedBoard { rows: usize, cols: usize },
    InvalidCell { character: char, index: usize },
    InvalidSides { human: Mark, bot: Mark },
    OutOfBounds(Position),
    CellOccupied(Position),
    NotYourTurn(Side),
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::NoAvailableMoves => write!(f, "No empty cell left to play"),
            MoveError::MalformedBoard { rows, cols } => {
                write!(f, "Board must be 3x3, got {} rows with {} columns", rows, cols)
            }
            MoveError::InvalidCell { character, index } => {
                write!(f, "Invalid cell character '{}' at index {}", character, index)
            }
            MoveError::InvalidSides { human, bot } => {
                write!(f, "Invalid side marks: human '{}', bot '{}'", human, bot)
            }
            MoveError::OutOfBounds(position) => write!(f, "Position {} out of bounds", position),
            MoveError::CellOccupied(position) => write!(f, "Cell {} is already marked", position),
            MoveError::NotYourTurn(side) => write!(f, "Not {:?}'s turn", side),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
