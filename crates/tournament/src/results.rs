//! Tournament results storage and reporting

use anyhow::{Context, Result};
use quixo_core::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Result for X when `winner` made a line.
    pub fn from_winner(winner: Symbol) -> Self {
        match winner {
            Symbol::X => GameResult::Win,
            Symbol::O => GameResult::Loss,
        }
    }

    /// Same game seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games decided by an illegal successor board (counted in wins/losses too)
    #[serde(default)]
    pub forfeits: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult, forfeit: bool) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        if forfeit {
            self.forfeits += 1;
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from agent1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Same match seen from agent2.
    pub fn flipped(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
            forfeits: self.forfeits,
        }
    }
}

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating agents
    pub participants: Vec<String>,
    /// One entry per pairing
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent1: String,
    pub agent2: String,
    pub result: MatchResult,
}

/// Points of one participant over the whole tournament.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standing {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: f64,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent1: &str, agent2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            result,
        });
    }

    /// Save results to a pretty JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize results")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write results to {}", path.display()))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read results from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse results in {}", path.display()))
    }

    /// Per-participant totals, best first. A win is one point, a draw half.
    pub fn standings(&self) -> Vec<Standing> {
        let mut table: BTreeMap<&str, Standing> = self
            .participants
            .iter()
            .map(|name| {
                (
                    name.as_str(),
                    Standing {
                        name: name.clone(),
                        ..Standing::default()
                    },
                )
            })
            .collect();

        for entry in &self.matches {
            for (name, result) in [
                (&entry.agent1, entry.result.clone()),
                (&entry.agent2, entry.result.flipped()),
            ] {
                let row = table.entry(name.as_str()).or_insert_with(|| Standing {
                    name: name.clone(),
                    ..Standing::default()
                });
                row.wins += result.wins;
                row.losses += result.losses;
                row.draws += result.draws;
                row.points += result.wins as f64 + 0.5 * result.draws as f64;
            }
        }

        let mut rows: Vec<Standing> = table.into_values().collect();
        rows.sort_by(|a, b| b.points.total_cmp(&a.points));
        rows
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "=== Tournament: {} ===\n", self.name);
        let _ = writeln!(report, "Participants: {}", self.participants.join(", "));
        let _ = writeln!(
            report,
            "Config: {} games/match, max {} plies\n",
            self.config.games, self.config.max_moves
        );

        report.push_str("Results:\n");
        let _ = writeln!(
            report,
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}",
            "Agent 1", "Agent 2", "W", "L", "D"
        );
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            let _ = writeln!(
                report,
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}",
                entry.agent1, entry.agent2, entry.result.wins, entry.result.losses, entry.result.draws
            );
        }

        report.push_str("\nStandings:\n");
        for (rank, row) in self.standings().iter().enumerate() {
            let _ = writeln!(
                report,
                "{:>2}. {:<20} {:>5.1} pts ({}-{}-{})",
                rank + 1,
                row.name,
                row.points,
                row.wins,
                row.losses,
                row.draws
            );
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
