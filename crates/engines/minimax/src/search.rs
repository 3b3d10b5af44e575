//! Minimax search with alpha-beta pruning over a lazily expanded game tree.
//!
//! Children are created one at a time inside the recursion, so a cutoff stops
//! generation of the remaining siblings. Values are always taken from the
//! root mover's point of view: the root and every even ply maximize, odd
//! plies minimize.

use quixo_core::{is_winner, legal_moves, Board, Move, QuixoError, SearchLimits, Symbol};
use rayon::prelude::*;
use tracing::{error, trace};

use crate::eval::{evaluate_after, Weights};
use crate::ordering::order_moves;
use crate::tree::{GameTree, NodeId};
use crate::MinimaxConfig;

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Best root move and its value (None if no legal moves)
    pub best_move: Option<(Move, i32)>,
    /// True if a budget ran out before every root move was searched
    pub stopped: bool,
    /// Line of play expected after the best move
    pub principal_variation: Vec<Move>,
}

struct Searcher<'a> {
    tree: GameTree,
    mover: Symbol,
    weights: Weights,
    move_ordering: bool,
    limits: &'a SearchLimits,
    nodes: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    fn new(root: Board, mover: Symbol, config: &MinimaxConfig, limits: &'a SearchLimits) -> Self {
        Self {
            tree: GameTree::new(root),
            mover,
            weights: config.weights,
            move_ordering: config.move_ordering,
            limits,
            nodes: 0,
            stopped: false,
        }
    }

    /// Legal moves for `side`, ordered when enabled and at least two plies remain.
    fn candidates(&self, board: &Board, side: Symbol, depth: u8) -> Result<Vec<Move>, QuixoError> {
        let mut moves = legal_moves(board, side);
        if moves.is_empty() {
            error!(%board, %side, "no legal moves in a non-terminal position");
            return Err(QuixoError::NoLegalMoves {
                symbol: side,
                board: *board,
            });
        }
        if self.move_ordering && depth > 1 {
            order_moves(board, side, &mut moves);
        }
        Ok(moves)
    }

    fn expand(&mut self, parent: NodeId, mv: Move, side: Symbol) -> Result<NodeId, QuixoError> {
        let board = self.tree.node(parent).board.apply_move(mv, side)?;
        self.nodes += 1;
        Ok(self.tree.add_child(parent, mv, board))
    }

    fn alpha_beta(
        &mut self,
        id: NodeId,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, QuixoError> {
        let board = self.tree.node(id).board;

        let side = if maximizing {
            self.mover
        } else {
            self.mover.other()
        };

        // `side.other()` made the slide that produced this node. A full board
        // without a line is still scored by the heuristic.
        if depth == 0 || is_winner(&board, Symbol::X) || is_winner(&board, Symbol::O) {
            let value = evaluate_after(&board, self.mover, side.other(), &self.weights);
            self.tree.set_value(id, value);
            return Ok(value);
        }

        let moves = self.candidates(&board, side, depth)?;

        let mut value = if maximizing { i32::MIN } else { i32::MAX };
        let mut cutoff = false;

        for mv in moves {
            if self.limits.exhausted(self.nodes) {
                self.stopped = true;
                return Ok(value);
            }

            let child = self.expand(id, mv, side)?;
            let score = self.alpha_beta(child, depth - 1, alpha, beta, !maximizing)?;
            if self.stopped {
                return Ok(value);
            }

            if maximizing {
                value = value.max(score);
                if value >= beta {
                    cutoff = true;
                    break; // Beta cutoff
                }
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                if value <= alpha {
                    cutoff = true;
                    break; // Alpha cutoff
                }
                beta = beta.min(value);
            }
        }

        // A cut node only has a bound, not a value.
        if !cutoff {
            self.tree.set_value(id, value);
        }
        Ok(value)
    }
}

/// Searches `board` for `mover` and returns the best root move with its value.
///
/// Ties between root moves keep the first one in candidate order.
///
/// # Arguments
/// * `board` - The position to search
/// * `mover` - Side to move; values are from its point of view
/// * `config` - Evaluation weights, move ordering and parallelism switches
/// * `limits` - Depth plus optional time and node budgets
/// * `nodes` - Counter for nodes expanded (for statistics)
pub fn pick_best_move(
    board: &Board,
    mover: Symbol,
    config: &MinimaxConfig,
    limits: &SearchLimits,
    nodes: &mut u64,
) -> Result<SearchOutcome, QuixoError> {
    if config.parallel {
        return pick_best_move_parallel(board, mover, config, limits, nodes);
    }

    let depth = limits.depth.max(1);
    let mut searcher = Searcher::new(*board, mover, config, limits);
    let moves = searcher.candidates(board, mover, depth)?;
    let first = moves[0];

    let mut best: Option<(Move, i32, NodeId)> = None;
    let mut alpha = i32::MIN;

    for mv in moves {
        if limits.exhausted(searcher.nodes) {
            searcher.stopped = true;
            break;
        }

        let child = searcher.expand(GameTree::ROOT, mv, mover)?;
        let score = searcher.alpha_beta(child, depth - 1, alpha, i32::MAX, false)?;
        if searcher.stopped {
            break;
        }
        trace!(%mv, score, "root move searched");

        if best.is_none_or(|(_, best_score, _)| score > best_score) {
            best = Some((mv, score, child));
        }
        alpha = alpha.max(score);
    }

    *nodes += searcher.nodes;

    let outcome = match best {
        Some((mv, score, child)) => {
            if !searcher.stopped {
                searcher.tree.set_value(GameTree::ROOT, score);
            }
            SearchOutcome {
                best_move: Some((mv, score)),
                stopped: searcher.stopped,
                principal_variation: searcher.tree.principal_variation(child),
            }
        }
        None => fallback(board, mover, first, &config.weights)?,
    };
    Ok(outcome)
}

/// Root-split search: every root move is searched on a rayon worker with its
/// own tree and a full window. Root-level pruning is given up; the results are
/// collected in candidate order so the tie-break matches the sequential search.
fn pick_best_move_parallel(
    board: &Board,
    mover: Symbol,
    config: &MinimaxConfig,
    limits: &SearchLimits,
    nodes: &mut u64,
) -> Result<SearchOutcome, QuixoError> {
    struct Branch {
        mv: Move,
        score: Option<i32>,
        nodes: u64,
        line: Vec<Move>,
    }

    let depth = limits.depth.max(1);
    let root = Searcher::new(*board, mover, config, limits);
    let moves = root.candidates(board, mover, depth)?;
    let first = moves[0];

    let branches: Vec<Branch> = moves
        .par_iter()
        .map(|&mv| -> Result<Branch, QuixoError> {
            let child = board.apply_move(mv, mover)?;
            let mut searcher = Searcher::new(child, mover, config, limits);
            let score = searcher.alpha_beta(GameTree::ROOT, depth - 1, i32::MIN, i32::MAX, false)?;

            let mut line = vec![mv];
            line.extend(searcher.tree.principal_variation(GameTree::ROOT));
            Ok(Branch {
                mv,
                score: (!searcher.stopped).then_some(score),
                nodes: searcher.nodes + 1,
                line,
            })
        })
        .collect::<Result<_, _>>()?;

    *nodes += branches.iter().map(|b| b.nodes).sum::<u64>();
    let stopped = branches.iter().any(|b| b.score.is_none());

    let mut best: Option<&Branch> = None;
    for branch in branches.iter().filter(|b| b.score.is_some()) {
        trace!(mv = %branch.mv, score = branch.score, "root move searched");
        if best.is_none_or(|b| branch.score > b.score) {
            best = Some(branch);
        }
    }

    match best {
        Some(branch) => Ok(SearchOutcome {
            best_move: branch.score.map(|s| (branch.mv, s)),
            stopped,
            principal_variation: branch.line.clone(),
        }),
        None => fallback(board, mover, first, &config.weights),
    }
}

/// Nothing finished within budget: play the first candidate, scored statically.
fn fallback(
    board: &Board,
    mover: Symbol,
    first: Move,
    weights: &Weights,
) -> Result<SearchOutcome, QuixoError> {
    let next = board.apply_move(first, mover)?;
    Ok(SearchOutcome {
        best_move: Some((first, evaluate_after(&next, mover, mover, weights))),
        stopped: true,
        principal_variation: vec![first],
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
