//! Legality, win and draw detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::*;

/// Number of scoring lines: 5 rows, 5 columns and the 2 main diagonals.
pub const LINE_COUNT: usize = 2 * SIZE + 2;

/// Every line of the grid, rows first, then columns, then both diagonals.
pub const LINES: [[Pos; SIZE]; LINE_COUNT] = build_lines();

const fn build_lines() -> [[Pos; SIZE]; LINE_COUNT] {
    let mut lines = [[Pos::new(0, 0); SIZE]; LINE_COUNT];
    let mut i = 0;
    while i < SIZE {
        let mut j = 0;
        while j < SIZE {
            lines[i][j] = Pos::new(i as u8, j as u8);
            lines[SIZE + i][j] = Pos::new(j as u8, i as u8);
            j += 1;
        }
        lines[2 * SIZE][i] = Pos::new(i as u8, i as u8);
        lines[2 * SIZE + 1][i] = Pos::new(i as u8, (SIZE - 1 - i) as u8);
        i += 1;
    }
    lines
}

/// State of a game after a move, as adjudicated by a match runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Symbol),
    Draw,
}

/// Whether a piece at `pos` may be pushed in `dir` without pushing it into
/// the border it already touches.
#[inline]
pub fn direction_allowed(pos: Pos, dir: Direction) -> bool {
    match dir {
        Direction::Left => pos.col != 0,
        Direction::Right => pos.col != EDGE,
        Direction::Up => pos.row != 0,
        Direction::Down => pos.row != EDGE,
    }
}

/// A move is legal when its origin is a perimeter cell that is empty or
/// already ours, and its direction points away from the origin's own border.
pub fn is_legal_move(board: &Board, mv: Move, symbol: Symbol) -> bool {
    if !mv.from.is_perimeter() {
        return false;
    }
    match board.get(mv.from) {
        Some(owner) if owner != symbol => false,
        _ => direction_allowed(mv.from, mv.dir),
    }
}

/// Contents of one line.
#[inline]
pub fn line_cells(board: &Board, line: &[Pos; SIZE]) -> [Option<Symbol>; SIZE] {
    let mut out = [None; SIZE];
    for (slot, &pos) in out.iter_mut().zip(line.iter()) {
        *slot = board.get(pos);
    }
    out
}

pub fn is_winner(board: &Board, symbol: Symbol) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Some(symbol)))
}

pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

pub fn is_terminal(board: &Board) -> bool {
    Symbol::ALL.iter().any(|&s| is_winner(board, s)) || is_full(board)
}

/// Adjudicate `board` right after `last_mover` played.
///
/// A slide can complete lines for both sides at once; the mover then loses.
pub fn outcome(board: &Board, last_mover: Symbol) -> GameStatus {
    let mover_line = is_winner(board, last_mover);
    let other_line = is_winner(board, last_mover.other());
    match (mover_line, other_line) {
        (_, true) => GameStatus::Won(last_mover.other()),
        (true, false) => GameStatus::Won(last_mover),
        (false, false) if is_full(board) => GameStatus::Draw,
        (false, false) => GameStatus::InProgress,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
