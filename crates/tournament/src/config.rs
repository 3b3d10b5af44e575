//! Tournament files and agent specifications.
//!
//! ```toml
//! name = "depth sweep"
//!
//! [match]
//! games = 20
//! max_moves = 200
//!
//! [[agents]]
//! name = "minimax-d2"
//! kind = "minimax"
//! [agents.minimax]
//! depth = 2
//!
//! [[agents]]
//! name = "random"
//! kind = "random"
//! seed = 7
//! ```

use anyhow::{bail, Context, Result};
use minimax_engine::{MinimaxAgent, MinimaxConfig};
use quixo_core::{Agent, QuixoError};
use random_engine::RandomAgent;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Minimax,
    Random,
}

/// One participant of a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub kind: AgentKind,
    /// Seed of a random agent (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Settings of a minimax agent (None = defaults)
    #[serde(default)]
    pub minimax: Option<MinimaxConfig>,
}

impl AgentSpec {
    /// Parse a command-line spec: `minimax`, `minimax:<depth>`, `random`,
    /// `random:<seed>`.
    pub fn parse(spec: &str) -> Result<Self> {
        let (kind, arg) = match spec.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (spec, None),
        };

        match kind.to_lowercase().as_str() {
            "minimax" | "mm" => {
                let mut config = MinimaxConfig::default();
                if let Some(depth) = arg {
                    config.depth = depth
                        .parse()
                        .with_context(|| format!("invalid depth in agent spec '{spec}'"))?;
                }
                Ok(Self {
                    name: spec.to_string(),
                    kind: AgentKind::Minimax,
                    seed: None,
                    minimax: Some(config),
                })
            }
            "random" => {
                let seed = arg
                    .map(str::parse::<u64>)
                    .transpose()
                    .with_context(|| format!("invalid seed in agent spec '{spec}'"))?;
                Ok(Self {
                    name: spec.to_string(),
                    kind: AgentKind::Random,
                    seed,
                    minimax: None,
                })
            }
            _ => bail!("unknown agent '{spec}' (expected minimax[:depth] or random[:seed])"),
        }
    }

    /// Build the agent this spec describes.
    pub fn build(&self) -> Result<Box<dyn Agent>, QuixoError> {
        Ok(match self.kind {
            AgentKind::Minimax => {
                let config = self.minimax.clone().unwrap_or_default();
                Box::new(MinimaxAgent::with_config(config)?)
            }
            AgentKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        })
    }
}

/// Round-robin tournament description, read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentFile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default, rename = "match")]
    pub match_config: MatchConfig,
    pub agents: Vec<AgentSpec>,
}

fn default_name() -> String {
    "round robin".to_string()
}

impl TournamentFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tournament file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("invalid tournament file {}", path.display()))
    }

    /// Parse and validate a tournament description.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: TournamentFile = toml::from_str(contents)?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.agents.len() < 2 {
            bail!("a tournament needs at least two agents, got {}", self.agents.len());
        }
        for (i, agent) in self.agents.iter().enumerate() {
            if self.agents[..i].iter().any(|other| other.name == agent.name) {
                bail!("duplicate agent name '{}'", agent.name);
            }
            if let Some(config) = &agent.minimax {
                config
                    .validate()
                    .with_context(|| format!("agent '{}'", agent.name))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
