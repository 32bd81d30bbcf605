use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::MoveError;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    Cross,
    Circle,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Cross => Some(Mark::Circle),
            Mark::Circle => Some(Mark::Cross),
            Mark::Empty => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Cross => 'X',
            Mark::Circle => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | '-' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Cross),
            'O' | 'o' => Some(Mark::Circle),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }
}

/// Which mark each side plays. The bot is always the maximizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sides {
    human: Mark,
    bot: Mark,
}

impl Sides {
    pub fn new(human: Mark, bot: Mark) -> Result<Self, MoveError> {
        if human == Mark::Empty || bot == Mark::Empty || human == bot {
            return Err(MoveError::InvalidSides { human, bot });
        }
        Ok(Self { human, bot })
    }

    pub fn for_human(human: Mark) -> Result<Self, MoveError> {
        let bot = human.opponent().ok_or(MoveError::InvalidSides { human, bot: Mark::Empty })?;
        Self::new(human, bot)
    }

    pub fn human(&self) -> Mark {
        self.human
    }

    pub fn bot(&self) -> Mark {
        self.bot
    }

    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Human => self.human,
            Side::Bot => self.bot,
        }
    }

    pub fn side_of(&self, mark: Mark) -> Option<Side> {
        if mark == self.human {
            Some(Side::Human)
        } else if mark == self.bot {
            Some(Side::Bot)
        } else {
            None
        }
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self {
            human: Mark::Cross,
            bot: Mark::Circle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[2]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    NoWinner,
    HumanWins,
    BotWins,
}

impl Classification {
    pub fn score(&self) -> i32 {
        match self {
            Classification::HumanWins => -1,
            Classification::BotWins => 1,
            Classification::NoWinner => 0,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Classification::HumanWins => Some(Side::Human),
            Classification::BotWins => Some(Side::Bot),
            Classification::NoWinner => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    /// Winner code reported at game end: 1 bot, 0 human, -1 draw.
    pub fn result_code(&self) -> Option<i32> {
        match self {
            GameStatus::Won(Side::Bot) => Some(1),
            GameStatus::Won(Side::Human) => Some(0),
            GameStatus::Draw => Some(-1),
            GameStatus::InProgress => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Random => write!(f, "random"),
            BotType::Minimax => write!(f, "minimax"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Bot,
    Random,
}
