use crate::{board::Board, rules::direction_allowed, types::*};

/// The 16 boundary cells in row-major order.
pub const PERIMETER: [Pos; 16] = [
    Pos::new(0, 0),
    Pos::new(0, 1),
    Pos::new(0, 2),
    Pos::new(0, 3),
    Pos::new(0, 4),
    Pos::new(1, 0),
    Pos::new(1, 4),
    Pos::new(2, 0),
    Pos::new(2, 4),
    Pos::new(3, 0),
    Pos::new(3, 4),
    Pos::new(4, 0),
    Pos::new(4, 1),
    Pos::new(4, 2),
    Pos::new(4, 3),
    Pos::new(4, 4),
];

/// Upper bound on legal moves in any position (4 corners x 2 + 12 edges x 3).
pub const MAX_MOVES: usize = 44;

/// Generate all legal moves for `symbol`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, symbol: Symbol) -> Vec<Move> {
    let mut out = Vec::with_capacity(MAX_MOVES);
    legal_moves_into(board, symbol, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Order is fixed: perimeter cells in [`PERIMETER`] order, and for each cell
/// the directions in [`Direction::ALL`] order.
pub fn legal_moves_into(board: &Board, symbol: Symbol, out: &mut Vec<Move>) {
    out.clear();
    for &from in PERIMETER.iter() {
        if matches!(board.get(from), Some(owner) if owner != symbol) {
            continue;
        }
        for dir in Direction::ALL {
            if direction_allowed(from, dir) {
                out.push(Move::new(dir, from));
            }
        }
    }
}

/// The first legal move for `symbol` that turns `before` into `after`.
pub fn find_move(before: &Board, after: &Board, symbol: Symbol) -> Option<Move> {
    legal_moves(before, symbol)
        .into_iter()
        .find(|&mv| before.apply_move(mv, symbol).is_ok_and(|b| b == *after))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
