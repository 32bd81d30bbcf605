use super::board::Board;
use super::types::{Classification, GameStatus, Mark, Position, Sides, WinningLine};

const fn p(row: usize, col: usize) -> Position {
    Position { row, col }
}

// Columns, then rows, then the two diagonals.
const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn has_empty_cell(board: &Board) -> bool {
    board
        .cells()
        .iter()
        .any(|row| row.iter().any(|&cell| cell == Mark::Empty))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&cells| {
        let mark = board.get(cells[0]);
        let owned = mark != Mark::Empty && cells[1..].iter().all(|&cell| board.get(cell) == mark);
        owned.then(|| WinningLine::new(mark, cells))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Marks outside the designation (impossible for a valid `Sides`) count as no winner.
pub fn classify(board: &Board, sides: &Sides) -> Classification {
    match check_win(board) {
        Some(mark) if mark == sides.bot() => Classification::BotWins,
        Some(mark) if mark == sides.human() => Classification::HumanWins,
        _ => Classification::NoWinner,
    }
}

pub fn evaluate_status(board: &Board, sides: &Sides) -> GameStatus {
    if let Some(side) = classify(board, sides).winner() {
        return GameStatus::Won(side);
    }

    if has_empty_cell(board) {
        GameStatus::InProgress
    } else {
        GameStatus::Draw
    }
}
