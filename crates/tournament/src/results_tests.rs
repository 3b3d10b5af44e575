use super::*;

fn sample() -> TournamentResults {
    let mut results = TournamentResults::new(
        "sample",
        vec!["minimax".into(), "random".into(), "random-2".into()],
        MatchConfig::default(),
    );
    results.add_match(
        "minimax",
        "random",
        MatchResult {
            wins: 3,
            losses: 0,
            draws: 1,
            forfeits: 0,
        },
    );
    results.add_match(
        "random",
        "random-2",
        MatchResult {
            wins: 1,
            losses: 2,
            draws: 1,
            forfeits: 1,
        },
    );
    results
}

#[test]
fn test_match_result_tally() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win, false);
    result.record(GameResult::Draw, false);
    result.record(GameResult::Loss, true);

    assert_eq!(result.total_games(), 3);
    assert_eq!(result.forfeits, 1);
    assert!((result.score() - 0.5).abs() < 1e-9);
    assert_eq!(result.flipped().wins, 1);
    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn test_game_result_helpers() {
    assert_eq!(GameResult::from_winner(Symbol::X), GameResult::Win);
    assert_eq!(GameResult::from_winner(Symbol::O), GameResult::Loss);
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn test_standings_order() {
    let standings = sample().standings();
    let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["minimax", "random-2", "random"]);
    assert!((standings[0].points - 3.5).abs() < 1e-9);
    assert!((standings[1].points - 2.5).abs() < 1e-9);
    assert!((standings[2].points - 2.0).abs() < 1e-9);
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("quixo_results_{}.json", std::process::id()));
    let results = sample();
    results.save(&path).unwrap();
    let loaded = TournamentResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, results);
}

#[test]
fn test_load_missing_file_has_context() {
    let path = std::env::temp_dir().join("quixo_results_does_not_exist.json");
    let err = TournamentResults::load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to read results"));
}

#[test]
fn test_report_lists_every_match() {
    let report = sample().generate_report();
    assert!(report.contains("=== Tournament: sample ==="));
    assert!(report.contains("Standings:"));
    assert_eq!(report.matches(" vs ").count(), 3); // header + 2 matches
}
