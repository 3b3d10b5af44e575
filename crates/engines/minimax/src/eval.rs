//! Line-count evaluation.

use quixo_core::{is_winner, line_cells, outcome, Board, GameStatus, Symbol, LINES, SIZE};
use serde::{Deserialize, Serialize};

/// Score of a line holding k of one side's marks and no opposing mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Completed line, also the value of a won position
    pub five: i32,
    /// Four marks and one empty cell
    pub four: i32,
    /// Three marks and two empty cells
    pub three: i32,
    /// Two marks and three empty cells
    pub two: i32,
}

impl Weights {
    /// Scale used by the explicit game-tree variant of the engine.
    pub const TREE_VARIANT: Weights = Weights {
        five: 1000,
        four: 50,
        three: 10,
        two: 5,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            five: 1000,
            four: 100,
            three: 10,
            two: 5,
        }
    }
}

/// Value of one line for `symbol`. Lines holding both marks are dead and
/// score 0.
pub fn line_score(line: &[Option<Symbol>; SIZE], symbol: Symbol, weights: &Weights) -> i32 {
    let mut own = 0;
    let mut empty = 0;
    for cell in line {
        match cell {
            None => empty += 1,
            Some(s) if *s == symbol => own += 1,
            Some(_) => {}
        }
    }
    match (own, empty) {
        (5, _) => weights.five,
        (4, 1) => weights.four,
        (3, 2) => weights.three,
        (2, 3) => weights.two,
        _ => 0,
    }
}

/// Evaluates `board` from `mover`'s perspective.
///
/// A board already won by `mover` scores `weights.five`, one won by the
/// opponent `-weights.five`. Otherwise each line contributes its score for
/// `mover` minus its score for the opponent.
pub fn evaluate(board: &Board, mover: Symbol, weights: &Weights) -> i32 {
    let opponent = mover.other();
    if is_winner(board, mover) {
        return weights.five;
    }
    if is_winner(board, opponent) {
        return -weights.five;
    }

    LINES
        .iter()
        .map(|line| {
            let cells = line_cells(board, line);
            line_score(&cells, mover, weights) - line_score(&cells, opponent, weights)
        })
        .sum()
}

/// Evaluates the position `last_mover` just produced, from `mover`'s
/// perspective.
///
/// Decided positions are scored the way the match runner adjudicates them:
/// a slide that completes lines for both sides loses for `last_mover`.
/// Undecided positions fall through to [`evaluate`].
pub fn evaluate_after(board: &Board, mover: Symbol, last_mover: Symbol, weights: &Weights) -> i32 {
    match outcome(board, last_mover) {
        GameStatus::Won(winner) if winner == mover => weights.five,
        GameStatus::Won(_) => -weights.five,
        GameStatus::InProgress | GameStatus::Draw => evaluate(board, mover, weights),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
