use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use quixo_core::{
    is_legal_move, is_terminal, is_winner, legal_moves, Board, Direction, Move, Pos, Symbol,
    CELLS, LINES,
};

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(-1i8..=1, CELLS).prop_map(|cells| {
        let rows: Vec<Vec<i8>> = cells.chunks(5).map(|r| r.to_vec()).collect();
        Board::from_grid(&rows).expect("5x5 grid of -1/0/1")
    })
}

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::X), Just(Symbol::O)]
}

fn arb_move() -> impl Strategy<Value = Move> {
    (0u8..5, 0u8..5, 0usize..4).prop_map(|(row, col, d)| Move::new(Direction::ALL[d], Pos::new(row, col)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_generated_moves_are_exactly_the_legal_ones(board in arb_board(), symbol in arb_symbol()) {
        let generated = legal_moves(&board, symbol);
        let mut expected = Vec::new();
        for idx in 0..CELLS {
            for dir in Direction::ALL {
                let mv = Move::new(dir, Pos::from_idx(idx));
                if is_legal_move(&board, mv, symbol) {
                    expected.push(mv);
                }
            }
        }
        prop_assert_eq!(generated.len(), expected.len());
        for mv in &expected {
            prop_assert!(generated.contains(mv));
        }
    }

    #[test]
    fn prop_apply_conserves_or_adds_one(board in arb_board(), symbol in arb_symbol(), mv in arb_move()) {
        match board.apply_move(mv, symbol) {
            Ok(next) => {
                let added = if board.get(mv.from).is_none() { 1 } else { 0 };
                prop_assert_eq!(next.piece_count(), board.piece_count() + added);
                prop_assert_eq!(next.count(symbol.other()), board.count(symbol.other()));
                prop_assert_eq!(next.get(mv.destination()), Some(symbol));
            }
            Err(_) => prop_assert!(!is_legal_move(&board, mv, symbol)),
        }
    }

    #[test]
    fn prop_apply_only_touches_the_origin_line(board in arb_board(), symbol in arb_symbol(), mv in arb_move()) {
        if let Ok(next) = board.apply_move(mv, symbol) {
            for idx in 0..CELLS {
                let pos = Pos::from_idx(idx);
                let on_line = match mv.dir {
                    Direction::Left | Direction::Right => pos.row == mv.from.row,
                    Direction::Up | Direction::Down => pos.col == mv.from.col,
                };
                if !on_line {
                    prop_assert_eq!(next.get(pos), board.get(pos));
                }
            }
        }
    }

    #[test]
    fn prop_non_terminal_boards_have_moves(board in arb_board()) {
        if !is_terminal(&board) {
            prop_assert!(!legal_moves(&board, Symbol::X).is_empty());
            prop_assert!(!legal_moves(&board, Symbol::O).is_empty());
        }
    }

    #[test]
    fn prop_breaking_a_line_clears_the_win(line in 0usize..12, cell in 0usize..5, symbol in arb_symbol()) {
        let mut board = Board::new();
        for &pos in LINES[line].iter() {
            board.set(pos, Some(symbol));
        }
        prop_assert!(is_winner(&board, symbol));
        board.set(LINES[line][cell], Some(symbol.other()));
        prop_assert!(!is_winner(&board, symbol));
    }
}

#[test]
fn random_playouts_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut board = Board::new();
        let mut symbol = Symbol::X;
        for _ in 0..200 {
            if is_terminal(&board) {
                break;
            }
            let moves = legal_moves(&board, symbol);
            let mv = *moves.choose(&mut rng).expect("non-terminal board has a move");
            let next = board.apply_move(mv, symbol).unwrap();
            assert!(next.piece_count() >= board.piece_count());
            assert!(next.piece_count() <= board.piece_count() + 1);
            board = next;
            symbol = symbol.other();
        }
    }
}
