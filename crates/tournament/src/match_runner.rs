//! Match runner for playing games between agents

use quixo_core::{find_move, outcome, Agent, Board, GameStatus, QuixoError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::TournamentFile;
use crate::results::{GameResult, MatchResult, TournamentResults};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether the agents swap symbols each game (X always moves first)
    pub alternate_symbols: bool,
    /// Log progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_moves: 200,
            alternate_symbols: true,
            verbose: true,
        }
    }
}

/// How a single game ended, from X's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// Plies played
    pub plies: u32,
    /// The loser handed back a board no legal move produces
    pub forfeit: bool,
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective
    pub fn run_match(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
    ) -> Result<MatchResult, QuixoError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.games {
            // Alternate symbols if configured
            let agent1_x = !self.config.alternate_symbols || game_num % 2 == 0;

            let record = if agent1_x {
                self.play_game(agent1, agent2)?
            } else {
                self.play_game(agent2, agent1)?
            };
            let game_result = if agent1_x {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result, record.forfeit);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.games,
                    agent1 = agent1.name(),
                    agent2 = agent2.name(),
                    symbol = if agent1_x { "X" } else { "O" },
                    result = game_result.as_str(),
                    plies = record.plies,
                    "{}-{}-{}",
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game from the empty board; the result is from X's perspective.
    pub fn play_game(&self, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameRecord, QuixoError> {
        let mut board = Board::new();
        x.new_game();
        o.new_game();

        let mut symbol = Symbol::X;
        for ply in 0..self.config.max_moves {
            let agent: &mut dyn Agent = match symbol {
                Symbol::X => &mut *x,
                Symbol::O => &mut *o,
            };

            let next = agent.play_turn(&board, symbol)?;
            if find_move(&board, &next, symbol).is_none() {
                warn!(player = agent.name(), %symbol, before = %board, after = %next, "illegal successor, game forfeited");
                return Ok(GameRecord {
                    result: GameResult::from_winner(symbol.other()),
                    plies: ply + 1,
                    forfeit: true,
                });
            }
            board = next;

            match outcome(&board, symbol) {
                GameStatus::InProgress => {}
                GameStatus::Won(winner) => {
                    return Ok(GameRecord {
                        result: GameResult::from_winner(winner),
                        plies: ply + 1,
                        forfeit: false,
                    });
                }
                GameStatus::Draw => {
                    return Ok(GameRecord {
                        result: GameResult::Draw,
                        plies: ply + 1,
                        forfeit: false,
                    });
                }
            }
            symbol = symbol.other();
        }

        // Ply limit reached
        Ok(GameRecord {
            result: GameResult::Draw,
            plies: self.config.max_moves,
            forfeit: false,
        })
    }
}

/// Play every pairing of the file's agents once, in file order.
pub fn run_round_robin(file: &TournamentFile) -> Result<TournamentResults, QuixoError> {
    let runner = MatchRunner::new(file.match_config.clone());
    let mut results = TournamentResults::new(
        &file.name,
        file.agents.iter().map(|a| a.name.clone()).collect(),
        file.match_config.clone(),
    );

    for (i, spec1) in file.agents.iter().enumerate() {
        for spec2 in &file.agents[i + 1..] {
            let mut agent1 = spec1.build()?;
            let mut agent2 = spec2.build()?;
            let result = runner.run_match(agent1.as_mut(), agent2.as_mut())?;
            info!(
                agent1 = %spec1.name,
                agent2 = %spec2.name,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "match finished"
            );
            results.add_match(&spec1.name, &spec2.name, result);
        }
    }

    Ok(results)
}

/// Quick utility to run a single match
pub fn quick_match(
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    games: u32,
) -> Result<MatchResult, QuixoError> {
    let config = MatchConfig {
        games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(agent1, agent2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
