use crate::games::SessionRng;
use super::board::Board;
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::types::{BotType, Position, Side, Sides};
use super::win_detector::{classify, has_empty_cell};

pub struct BotInput {
    pub board: Board,
    pub sides: Sides,
    pub side_to_move: Side,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            sides: state.sides(),
            side_to_move: state.current_side(),
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<Position, MoveError> {
    match bot_type {
        BotType::Random => calculate_random_move(&input.board, rng),
        BotType::Minimax => {
            let mut board = input.board;
            calculate_minimax_move(&mut board, &input.sides, input.side_to_move)
        }
    }
}

/// Uniform pick among the empty cells. No look-ahead.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, MoveError> {
    let available_moves = board.get_available_moves();
    if available_moves.is_empty() {
        return Err(MoveError::NoAvailableMoves);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Best move for `side_to_move` under optimal replies. The bot maximizes the score and the
/// human minimizes it; among equal scores the first cell in row-major order wins.
///
/// The board is used as scratch space and is back to its input state on return.
pub fn calculate_minimax_move(
    board: &mut Board,
    sides: &Sides,
    side_to_move: Side,
) -> Result<Position, MoveError> {
    let mark = sides.mark_of(side_to_move);
    let orientation = match side_to_move {
        Side::Bot => 1,
        Side::Human => -1,
    };

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.get_available_moves() {
        let score = {
            let mut guard = board.place(position, mark);
            minimax(&mut guard, sides, side_to_move == Side::Human)
        };

        let score = score * orientation;
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move.ok_or(MoveError::NoAvailableMoves)
}

/// Exhaustive minimax without pruning. Scores are from the bot's point of view:
/// +1 bot wins, -1 human wins, 0 draw.
pub fn minimax(board: &mut Board, sides: &Sides, is_maximizing: bool) -> i32 {
    let score = classify(board, sides).score();
    if score != 0 {
        return score;
    }

    if !has_empty_cell(board) {
        return 0;
    }

    let mark = if is_maximizing { sides.bot() } else { sides.human() };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for position in board.get_available_moves() {
        let mut guard = board.place(position, mark);
        let eval = minimax(&mut guard, sides, !is_maximizing);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{GameStatus, Mark};
    use crate::games::tictactoe::win_detector::evaluate_status;

    fn board(picture: &str) -> Board {
        picture.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // Bot plays circle.
        let mut b = board("OO./XX./...");
        let before = b;
        let best = calculate_minimax_move(&mut b, &Sides::default(), Side::Bot).unwrap();
        assert_eq!(best, Position::new(0, 2));
        assert_eq!(b, before);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        let mut b = board("O../XX./...");
        let best = calculate_minimax_move(&mut b, &Sides::default(), Side::Bot).unwrap();
        assert_eq!(best, Position::new(1, 2));
    }

    #[test]
    fn test_human_side_minimizes() {
        let mut b = board(".../..O/OXX");
        let best = calculate_minimax_move(&mut b, &Sides::default(), Side::Human).unwrap();
        assert_eq!(best, Position::new(1, 1));
    }

    #[test]
    fn test_ties_keep_first_cell_in_row_major_order() {
        // (0, 2) and (1, 2) both force a win.
        let mut b = board(".../.../XXO");
        assert_eq!(
            calculate_minimax_move(&mut b, &Sides::default(), Side::Bot),
            Ok(Position::new(0, 2))
        );

        // Every opening holds the draw, so (0, 0) is kept.
        let mut empty = Board::new();
        assert_eq!(
            calculate_minimax_move(&mut empty, &Sides::default(), Side::Bot),
            Ok(Position::new(0, 0))
        );
        assert_eq!(empty, Board::new());
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut b = board("XOX/XOO/OXX");
        assert_eq!(
            calculate_minimax_move(&mut b, &Sides::default(), Side::Bot),
            Err(MoveError::NoAvailableMoves)
        );
        let mut rng = SessionRng::new(42);
        assert_eq!(calculate_random_move(&b, &mut rng), Err(MoveError::NoAvailableMoves));
    }

    #[test]
    fn test_minimax_on_drawn_full_board_is_zero() {
        let mut b = board("XOX/XOO/OXX");
        assert!(!has_empty_cell(&b));
        assert_eq!(minimax(&mut b, &Sides::default(), true), 0);
        assert_eq!(minimax(&mut b, &Sides::default(), false), 0);
    }

    #[test]
    fn test_minimax_returns_win_score_immediately() {
        let mut b = board("OOO/XX./X..");
        assert_eq!(minimax(&mut b, &Sides::default(), false), 1);
        let mut b = board("XXX/OO./O..");
        assert_eq!(minimax(&mut b, &Sides::default(), true), -1);
    }

    #[test]
    fn test_minimax_leaves_board_untouched() {
        let mut b = board("X../.O./...");
        let before = b;
        let score = minimax(&mut b, &Sides::default(), false);
        assert_eq!(score, 0);
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_board_is_a_draw_under_perfect_play() {
        let mut b = Board::new();
        assert_eq!(minimax(&mut b, &Sides::default(), true), 0);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_optimal_self_play_always_draws() {
        let sides = Sides::default();
        for first in [Side::Bot, Side::Human] {
            let mut b = Board::new();
            let mut side = first;
            while evaluate_status(&b, &sides) == GameStatus::InProgress {
                let position = calculate_minimax_move(&mut b, &sides, side).unwrap();
                b.set(position, sides.mark_of(side));
                side = side.other();
            }
            assert_eq!(evaluate_status(&b, &sides), GameStatus::Draw);
        }
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        let sides = Sides::default();
        let mut rng = SessionRng::new(42);
        for game in 0..10 {
            let mut b = Board::new();
            let mut side = if game % 2 == 0 { Side::Bot } else { Side::Human };
            while evaluate_status(&b, &sides) == GameStatus::InProgress {
                let bot_type = match side {
                    Side::Bot => BotType::Minimax,
                    Side::Human => BotType::Random,
                };
                let input = BotInput { board: b, sides, side_to_move: side };
                let position = calculate_move(bot_type, input, &mut rng).unwrap();
                b.set(position, sides.mark_of(side));
                side = side.other();
            }
            assert_ne!(evaluate_status(&b, &sides), GameStatus::Won(Side::Human));
        }
    }

    #[test]
    fn test_random_move_is_legal_and_reproducible() {
        let b = board("XO./.X./O..");
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);
        for _ in 0..16 {
            let position = calculate_random_move(&b, &mut first).unwrap();
            assert_eq!(b.get(position), Mark::Empty);
            assert_eq!(calculate_random_move(&b, &mut second).unwrap(), position);
        }
    }

    #[test]
    fn test_random_move_covers_every_empty_cell() {
        let b = board("XO./.X./O..");
        let mut rng = SessionRng::new(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(calculate_random_move(&b, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), b.get_available_moves().len());
    }
}
