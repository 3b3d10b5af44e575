//! Error type shared by the rules, the engines and the match runner.

use thiserror::Error;

use crate::board::Board;
use crate::types::{Move, Symbol};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuixoError {
    #[error("illegal move {mv} for {symbol}")]
    InvalidMove { mv: Move, symbol: Symbol },

    #[error("no legal moves for {symbol} in non-terminal position {board}")]
    NoLegalMoves { symbol: Symbol, board: Board },

    #[error("malformed board: expected {expected} rows, got {got}")]
    WrongRowCount { expected: usize, got: usize },

    #[error("malformed board: row {row} has {got} cells, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("malformed board: invalid cell value '{value}' at row {row}, column {col}")]
    InvalidCell {
        value: String,
        row: usize,
        col: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}
