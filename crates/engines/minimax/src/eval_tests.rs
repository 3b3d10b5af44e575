use super::*;

fn board(s: &str) -> Board {
    Board::from_notation(s).unwrap()
}

#[test]
fn test_empty_board_is_balanced() {
    assert_eq!(evaluate(&Board::new(), Symbol::X, &Weights::default()), 0);
}

#[test]
fn test_line_scores() {
    let w = Weights::default();
    let x = Some(Symbol::X);
    let o = Some(Symbol::O);
    assert_eq!(line_score(&[x, x, x, x, x], Symbol::X, &w), 1000);
    assert_eq!(line_score(&[x, x, None, x, x], Symbol::X, &w), 100);
    assert_eq!(line_score(&[x, None, x, None, x], Symbol::X, &w), 10);
    assert_eq!(line_score(&[None, x, None, None, x], Symbol::X, &w), 5);
    assert_eq!(line_score(&[x, None, None, None, None], Symbol::X, &w), 0);
    // Mixed lines can never be completed
    assert_eq!(line_score(&[x, x, x, x, o], Symbol::X, &w), 0);
    assert_eq!(line_score(&[x, x, x, x, o], Symbol::O, &w), 0);
}

#[test]
fn test_partial_lines() {
    let w = Weights::default();
    assert_eq!(evaluate(&board("XX.../...../...../...../....."), Symbol::X, &w), 5);
    assert_eq!(evaluate(&board("XXX../...../...../...../....."), Symbol::X, &w), 10);
    assert_eq!(evaluate(&board("XXXX./...../...../...../....."), Symbol::X, &w), 100);
    assert_eq!(
        evaluate(&board("XXXX./...../...../...../....."), Symbol::X, &Weights::TREE_VARIANT),
        50
    );
    assert_eq!(evaluate(&board("XXO../...../...../...../....."), Symbol::X, &w), 0);
}

#[test]
fn test_wins_short_circuit() {
    let w = Weights::default();
    let b = board("XXXXX/OOOO./...../...../.....");
    assert_eq!(evaluate(&b, Symbol::X, &w), 1000);
    assert_eq!(evaluate(&b, Symbol::O, &w), -1000);
}

#[test]
fn test_double_line_loses_for_the_side_that_made_it() {
    let w = Weights::default();
    let b = board("XXXXX/OOOOO/...../...../.....");
    // Static view: the side asked about is checked first
    assert_eq!(evaluate(&b, Symbol::X, &w), 1000);
    // X's slide made both lines, so O wins
    assert_eq!(evaluate_after(&b, Symbol::X, Symbol::X, &w), -1000);
    assert_eq!(evaluate_after(&b, Symbol::O, Symbol::X, &w), 1000);
    // O's slide made both lines, so X wins
    assert_eq!(evaluate_after(&b, Symbol::X, Symbol::O, &w), 1000);
}

#[test]
fn test_evaluate_after_matches_evaluate_when_undecided() {
    let w = Weights::default();
    let single = board("XXXXX/OOOO./...../...../.....");
    assert_eq!(evaluate_after(&single, Symbol::X, Symbol::O, &w), 1000);
    assert_eq!(evaluate_after(&single, Symbol::O, Symbol::X, &w), -1000);

    let open = board("XO..X/.X.../..O../O..X./X...O");
    for last in Symbol::ALL {
        assert_eq!(evaluate_after(&open, Symbol::X, last, &w), evaluate(&open, Symbol::X, &w));
    }
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let w = Weights::default();
    let b = board("XO..X/.X.../..O../O..X./X...O");
    assert_eq!(evaluate(&b, Symbol::X, &w), -evaluate(&b, Symbol::O, &w));
}

#[test]
fn test_weights_from_partial_toml() {
    let w: Weights = toml::from_str("four = 50").unwrap();
    assert_eq!(w, Weights::TREE_VARIANT);
}
