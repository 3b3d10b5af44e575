use rayon::prelude::*;

use quixo_core::{legal_moves, perft, Board, Symbol};

#[test]
fn perft_empty_board_shallow() {
    let board = Board::new();
    assert_eq!(perft(&board, Symbol::X, 0), 1);
    assert_eq!(perft(&board, Symbol::X, 1), 44);
    // 32 first moves land on a corner (2 origins lost for O), 12 on an edge (3 lost)
    assert_eq!(perft(&board, Symbol::X, 2), 32 * 42 + 12 * 41);
}

#[test]
fn perft_is_symmetric_between_sides() {
    let board = Board::new();
    assert_eq!(perft(&board, Symbol::X, 2), perft(&board, Symbol::O, 2));
}

#[test]
fn perft_split_matches_whole() {
    let board = Board::from_notation("X...O/.O.../..X../...X./O...X").unwrap();
    let whole = perft(&board, Symbol::O, 3);

    let split: u64 = legal_moves(&board, Symbol::O)
        .par_iter()
        .map(|&mv| {
            let child = board.apply_move(mv, Symbol::O).unwrap();
            perft(&child, Symbol::X, 2)
        })
        .sum();

    assert_eq!(split, whole);
}

#[test]
fn perft_stops_at_won_positions() {
    let won = Board::from_notation("XXXXX/...../...../...../.....").unwrap();
    assert_eq!(perft(&won, Symbol::O, 3), 1);
}
