use crate::{
    board::Board,
    movegen::{MAX_MOVES, legal_moves_into},
    rules::is_winner,
    types::{Move, Symbol},
};

/// Pure perft node count.
/// Counts all positions reachable from `board` in exactly `depth` plies with
/// `symbol` to move first. Won positions are counted as leaves and not
/// expanded further.
pub fn perft(board: &Board, symbol: Symbol, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, symbol: Symbol, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || is_winner(board, Symbol::X) || is_winner(board, Symbol::O) {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, symbol, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let next = board
                .apply_move(mv, symbol)
                .expect("generated moves are legal");
            nodes += inner(&next, symbol.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(MAX_MOVES); depth as usize];
    inner(board, symbol, depth, &mut layers[..])
}
