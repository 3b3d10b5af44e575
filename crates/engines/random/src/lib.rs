//! Random Move Quixo Player
//!
//! Picks uniformly among all legal moves. Useful for:
//! - Baseline comparisons (the search engine should beat it almost always)
//! - Stress testing move generation and the match runner

use quixo_core::{legal_moves_into, Agent, Board, Move, QuixoError, SearchResult, Symbol, MAX_MOVES};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// A player that chooses a random legal move.
///
/// No evaluation is done. A fixed seed makes the sequence of choices
/// reproducible, which the tournament uses for repeatable runs.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
    seed: Option<u64>,
    moves: Vec<Move>,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn search(&mut self, board: &Board, symbol: Symbol) -> Result<SearchResult, QuixoError> {
        legal_moves_into(board, symbol, &mut self.moves);
        let best_move = self.moves.choose(&mut self.rng).copied();
        trace!(player = %symbol, choices = self.moves.len(), ?best_move, "random pick");

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.moves.len() as u64,
            stopped: false,
            principal_variation: best_move.into_iter().collect(),
        })
    }

    fn name(&self) -> &str {
        "Random"
    }

    /// Reseeded games replay the same choices.
    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
