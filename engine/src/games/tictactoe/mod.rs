mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, MarkGuard};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, calculate_random_move, minimax};
pub use error::MoveError;
pub use game_state::TicTacToeGameState;
pub use settings::TicTacToeSettings;
pub use types::{
    BOARD_SIZE, BotType, Classification, FirstPlayerMode, GameStatus, Mark, Position, Side, Sides,
    WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, classify, evaluate_status, has_empty_cell};
