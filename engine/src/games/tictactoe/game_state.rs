use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::MoveError;
use super::settings::TicTacToeSettings;
use super::types::{BotType, FirstPlayerMode, GameStatus, Mark, Position, Side, Sides, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_status};

/// Authoritative state of one human-vs-bot game.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    sides: Sides,
    bot_type: BotType,
    current_side: Side,
    status: GameStatus,
    last_move: Option<Position>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSettings, rng: &mut SessionRng) -> Result<Self, MoveError> {
        let sides = settings.sides()?;

        let current_side = match settings.first_player {
            FirstPlayerMode::Human => Side::Human,
            FirstPlayerMode::Bot => Side::Bot,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Side::Human
                } else {
                    Side::Bot
                }
            }
        };

        log!(
            "TicTacToe game started: human plays {}, {} bot, {:?} moves first",
            sides.human(),
            settings.bot_type,
            current_side
        );

        Ok(Self {
            board: Board::new(),
            sides,
            bot_type: settings.bot_type,
            current_side,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn sides(&self) -> Sides {
        self.sides
    }

    pub fn bot_type(&self) -> BotType {
        self.bot_type
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, side: Side, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if side != self.current_side {
            return Err(MoveError::NotYourTurn(side));
        }

        if !position.is_on_board() {
            return Err(MoveError::OutOfBounds(position));
        }

        if self.board.get(position) != Mark::Empty {
            return Err(MoveError::CellOccupied(position));
        }

        self.board.set(position, self.sides.mark_of(side));
        self.last_move = Some(position);
        self.move_count += 1;

        self.status = evaluate_status(&self.board, &self.sides);

        if self.status.is_over() {
            log!("TicTacToe game over after {} moves: {:?}", self.move_count, self.status);
        } else {
            self.current_side = side.other();
        }

        Ok(self.status)
    }

    /// Picks the bot's reply with the configured level and applies it.
    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Result<Position, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if self.current_side != Side::Bot {
            return Err(MoveError::NotYourTurn(Side::Bot));
        }

        let position = calculate_move(self.bot_type, BotInput::from_game_state(self), rng)?;
        self.place_mark(Side::Bot, position)?;
        Ok(position)
    }
}
