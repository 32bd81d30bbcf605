use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::error::MoveError;
use super::types::{BOARD_SIZE, Mark, Position};

/// Fixed 3x3 grid, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn from_rows(rows: &[Vec<Mark>]) -> Result<Self, MoveError> {
        if rows.len() != BOARD_SIZE {
            let cols = rows.first().map_or(0, Vec::len);
            return Err(MoveError::MalformedBoard { rows: rows.len(), cols });
        }

        let mut board = Self::new();
        for (row, marks) in rows.iter().enumerate() {
            if marks.len() != BOARD_SIZE {
                return Err(MoveError::MalformedBoard { rows: rows.len(), cols: marks.len() });
            }
            board.cells[row].copy_from_slice(marks);
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn get_available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, marks) in self.cells.iter().enumerate() {
            for (col, &cell) in marks.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// Puts `mark` on `position` for as long as the returned guard lives.
    pub fn place(&mut self, position: Position, mark: Mark) -> MarkGuard<'_> {
        let previous = self.get(position);
        self.set(position, mark);
        MarkGuard {
            board: self,
            position,
            previous,
        }
    }
}

impl TryFrom<Vec<Vec<Mark>>> for Board {
    type Error = MoveError;

    fn try_from(rows: Vec<Vec<Mark>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

/// Parses `X`, `O` and `.` cells; whitespace and `/` are ignored, so `"XX./OO./..."` works.
impl FromStr for Board {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (index, c) in s.chars().enumerate() {
            if c.is_whitespace() || c == '/' {
                continue;
            }
            let mark = Mark::from_char(c).ok_or(MoveError::InvalidCell { character: c, index })?;
            marks.push(mark);
        }

        if marks.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(MoveError::MalformedBoard {
                rows: marks.len().div_ceil(BOARD_SIZE),
                cols: BOARD_SIZE,
            });
        }

        let rows: Vec<Vec<Mark>> = marks.chunks(BOARD_SIZE).map(<[Mark]>::to_vec).collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Puts the guarded cell back to the mark it held before `Board::place` when dropped.
pub struct MarkGuard<'a> {
    board: &'a mut Board,
    position: Position,
    previous: Mark,
}

impl Deref for MarkGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MarkGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MarkGuard<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, self.previous);
    }
}
