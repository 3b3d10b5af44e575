//! Move ordering: strongest candidates first so alpha-beta cuts earlier.

use quixo_core::{legal_moves, outcome, Board, GameStatus, Move, Pos, Symbol};

/// Ordering classes, best first.
///
/// Classes follow the game outcome after the slide: one that completes lines
/// for both sides loses for the mover and is a `Gift`, not a `Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveClass {
    /// Wins the game for the mover
    Win,
    /// Takes away every immediate winning reply of the opponent
    Block,
    Quiet,
    /// Hands the game to the opponent
    Gift,
}

/// Whether `symbol` has a slide that wins the game outright.
pub fn has_winning_move(board: &Board, symbol: Symbol) -> bool {
    legal_moves(board, symbol).into_iter().any(|mv| {
        board
            .apply_move(mv, symbol)
            .is_ok_and(|next| outcome(&next, symbol) == GameStatus::Won(symbol))
    })
}

/// Classify `mv` for `mover`. `threatened` is whether the opponent could win
/// on its next move from `board`.
pub fn classify(board: &Board, mv: Move, mover: Symbol, threatened: bool) -> MoveClass {
    let opponent = mover.other();
    let Ok(next) = board.apply_move(mv, mover) else {
        return MoveClass::Gift;
    };
    match outcome(&next, mover) {
        GameStatus::Won(winner) if winner == mover => MoveClass::Win,
        GameStatus::Won(_) => MoveClass::Gift,
        _ if threatened && !has_winning_move(&next, opponent) => MoveClass::Block,
        _ => MoveClass::Quiet,
    }
}

/// Reorder `moves` in place: by class, then by Manhattan distance of the
/// destination cell to the centre. The sort is stable so ties keep the
/// generator order.
pub fn order_moves(board: &Board, mover: Symbol, moves: &mut [Move]) {
    let threatened = has_winning_move(board, mover.other());

    let mut keyed: Vec<(MoveClass, u8, Move)> = moves
        .iter()
        .map(|&mv| {
            (
                classify(board, mv, mover, threatened),
                mv.destination().manhattan(Pos::CENTER),
                mv,
            )
        })
        .collect();
    keyed.sort_by_key(|&(class, distance, _)| (class, distance));

    for (slot, (_, _, mv)) in moves.iter_mut().zip(keyed) {
        *slot = mv;
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
