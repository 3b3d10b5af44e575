//! Minimax Quixo Engine
//!
//! Depth-limited alpha-beta search over an explicit game tree, with a
//! line-count evaluation and win/block move ordering.

mod eval;
mod ordering;
mod search;
mod tree;

use std::time::Duration;

use quixo_core::{Agent, Board, QuixoError, SearchLimits, SearchResult, Symbol};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables of the minimax agent. Missing fields take their default, so a
/// config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Lookahead horizon in plies
    pub depth: u8,
    /// Order candidates (wins, blocks, quiet, gifts) at interior nodes
    pub move_ordering: bool,
    /// Search root moves on the rayon pool
    pub parallel: bool,
    /// Per-move wall-clock budget in milliseconds
    pub move_time_ms: Option<u64>,
    /// Per-move node budget
    pub max_nodes: Option<u64>,
    pub weights: Weights,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            move_ordering: true,
            parallel: false,
            move_time_ms: None,
            max_nodes: None,
            weights: Weights::default(),
        }
    }
}

impl MinimaxConfig {
    pub fn validate(&self) -> Result<(), QuixoError> {
        if self.depth == 0 {
            return Err(QuixoError::InvalidConfig {
                message: "search depth must be at least 1".to_string(),
            });
        }
        if self.max_nodes == Some(0) {
            return Err(QuixoError::InvalidConfig {
                message: "node budget must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn limits(&self) -> SearchLimits {
        let limits = match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        };
        limits.with_max_nodes(self.max_nodes)
    }
}

/// Alpha-beta player.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    config: MinimaxConfig,
    name: String,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxAgent {
    /// Agent with the given horizon and default settings otherwise.
    pub fn new(depth: u8) -> Result<Self, QuixoError> {
        Self::with_config(MinimaxConfig {
            depth,
            ..MinimaxConfig::default()
        })
    }

    pub fn with_config(config: MinimaxConfig) -> Result<Self, QuixoError> {
        config.validate()?;
        Ok(Self {
            name: format!("Minimax d{}", config.depth),
            config,
            nodes: 0,
        })
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self {
            config: MinimaxConfig::default(),
            name: format!("Minimax d{}", MinimaxConfig::default().depth),
            nodes: 0,
        }
    }
}

impl Agent for MinimaxAgent {
    fn search(&mut self, board: &Board, symbol: Symbol) -> Result<SearchResult, QuixoError> {
        self.nodes = 0;
        let limits = self.config.limits();
        limits.start();

        let outcome = search::pick_best_move(board, symbol, &self.config, &limits, &mut self.nodes)?;

        debug!(
            player = %symbol,
            best = ?outcome.best_move,
            nodes = self.nodes,
            stopped = outcome.stopped,
            "search finished"
        );

        Ok(SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
            principal_variation: outcome.principal_variation,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{evaluate, evaluate_after, line_score, Weights};
pub use ordering::{classify, has_winning_move, order_moves, MoveClass};
pub use search::{pick_best_move, SearchOutcome};
pub use tree::{GameNode, GameTree, NodeId};
