pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::QuixoError;
pub use movegen::*;
pub use perft::perft;
pub use rules::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Agent trait: implemented by every player (alpha-beta, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from the mover's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes expanded
    pub nodes: u64,
    /// Whether search was stopped early by a time or node budget
    pub stopped: bool,
    /// Expected line of play starting with `best_move`
    pub principal_variation: Vec<Move>,
}

/// Trait that all Quixo players implement.
///
/// A match runner only talks to players through this trait, so search-based
/// and baseline players are interchangeable.
pub trait Agent: Send {
    /// Choose a move for `symbol` on `board`.
    fn search(&mut self, board: &Board, symbol: Symbol) -> Result<SearchResult, QuixoError>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Play one turn: the board after exactly one legal move for `symbol`.
    ///
    /// The input board is never modified. When `symbol` has no legal move the
    /// board is returned unchanged.
    fn play_turn(&mut self, board: &Board, symbol: Symbol) -> Result<Board, QuixoError> {
        if legal_moves(board, symbol).is_empty() {
            tracing::warn!(%board, %symbol, "no legal move available, board unchanged");
            return Ok(*board);
        }

        let result = self.search(board, symbol)?;
        match result.best_move {
            Some(mv) => board.apply_move(mv, symbol),
            None => Ok(*board),
        }
    }
}
