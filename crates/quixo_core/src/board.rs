use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuixoError;
use crate::rules::is_legal_move;
use crate::types::*;

/// A 5x5 Quixo grid. `None` is an empty cell.
///
/// Boards are small `Copy` values: applying a move returns a new board and
/// never touches the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    cells: [Option<Symbol>; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Parse the row notation: five rows of `X`, `O` or `.` separated by `/`,
    /// row 0 first.
    pub fn from_notation(s: &str) -> Result<Self, QuixoError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(QuixoError::WrongRowCount {
                expected: SIZE,
                got: rows.len(),
            });
        }

        let mut board = Board::new();
        for (row, row_str) in rows.iter().enumerate() {
            let chars: Vec<char> = row_str.chars().collect();
            if chars.len() != SIZE {
                return Err(QuixoError::WrongRowLength {
                    row,
                    expected: SIZE,
                    got: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' | '-' | '_' => None,
                    _ => Some(Symbol::from_char(ch).ok_or_else(|| QuixoError::InvalidCell {
                        value: ch.to_string(),
                        row,
                        col,
                    })?),
                };
                board.cells[row * SIZE + col] = cell;
            }
        }
        Ok(board)
    }

    /// Build a board from the integer grid encoding: `1` is X, `-1` is O and
    /// `0` is empty.
    pub fn from_grid<R: AsRef<[i8]>>(grid: &[R]) -> Result<Self, QuixoError> {
        if grid.len() != SIZE {
            return Err(QuixoError::WrongRowCount {
                expected: SIZE,
                got: grid.len(),
            });
        }

        let mut board = Board::new();
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != SIZE {
                return Err(QuixoError::WrongRowLength {
                    row,
                    expected: SIZE,
                    got: values.len(),
                });
            }
            for (col, &v) in values.iter().enumerate() {
                board.cells[row * SIZE + col] = match v {
                    0 => None,
                    1 => Some(Symbol::X),
                    -1 => Some(Symbol::O),
                    other => {
                        return Err(QuixoError::InvalidCell {
                            value: other.to_string(),
                            row,
                            col,
                        });
                    }
                };
            }
        }
        Ok(board)
    }

    /// Integer grid encoding, inverse of [`Board::from_grid`].
    pub fn to_grid(&self) -> [[i8; SIZE]; SIZE] {
        let mut grid = [[0i8; SIZE]; SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            grid[idx / SIZE][idx % SIZE] = match cell {
                None => 0,
                Some(Symbol::X) => 1,
                Some(Symbol::O) => -1,
            };
        }
        grid
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Symbol> {
        self.cells[pos.idx()]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Option<Symbol>) {
        self.cells[pos.idx()] = cell;
    }

    pub fn cells(&self) -> &[Option<Symbol>; CELLS] {
        &self.cells
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&c| c == Some(symbol)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn piece_count(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Apply `mv` for `symbol`, returning the resulting board.
    ///
    /// Illegal moves are rejected before anything is written.
    pub fn apply_move(&self, mv: Move, symbol: Symbol) -> Result<Board, QuixoError> {
        if !is_legal_move(self, mv, symbol) {
            return Err(QuixoError::InvalidMove { mv, symbol });
        }
        let mut next = *self;
        next.slide(mv, symbol);
        Ok(next)
    }

    /// Shift the line of `mv.from` toward the origin and drop `symbol` on the
    /// far border. Only cells of that row or column are written.
    fn slide(&mut self, mv: Move, symbol: Symbol) {
        let Pos { row, col } = mv.from;
        match mv.dir {
            Direction::Right => {
                for c in col..EDGE {
                    self.cells[Pos::new(row, c).idx()] = self.cells[Pos::new(row, c + 1).idx()];
                }
            }
            Direction::Left => {
                for c in (1..=col).rev() {
                    self.cells[Pos::new(row, c).idx()] = self.cells[Pos::new(row, c - 1).idx()];
                }
            }
            Direction::Up => {
                for r in (1..=row).rev() {
                    self.cells[Pos::new(r, col).idx()] = self.cells[Pos::new(r - 1, col).idx()];
                }
            }
            Direction::Down => {
                for r in row..EDGE {
                    self.cells[Pos::new(r, col).idx()] = self.cells[Pos::new(r + 1, col).idx()];
                }
            }
        }
        self.cells[mv.destination().idx()] = Some(symbol);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..SIZE {
                let ch = self.cells[row * SIZE + col].map_or('.', Symbol::to_char);
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = QuixoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_notation(s)
    }
}

impl TryFrom<String> for Board {
    type Error = QuixoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::from_notation(&s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
