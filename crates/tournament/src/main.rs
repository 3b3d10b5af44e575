//! Tournament CLI
//!
//! Play matches between Quixo agents and run round-robin tournaments.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tournament::{run_round_robin, AgentSpec, MatchConfig, MatchRunner, TournamentFile, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tournament", about = "Quixo tournament runner")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Play a match between two agents (minimax[:depth] or random[:seed])
    Play {
        agent1: String,
        agent2: String,
        #[arg(long, short, default_value_t = 10)]
        games: u32,
        /// Override the depth of minimax agents given without one
        #[arg(long, short)]
        depth: Option<u8>,
        #[arg(long, default_value_t = 200)]
        max_moves: u32,
        /// Save the result as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the round robin described by a TOML file
    Run {
        #[arg(long, short)]
        config: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the report of a saved JSON result
    Report { file: PathBuf },
}

fn agent_spec(spec: &str, depth: Option<u8>) -> Result<AgentSpec> {
    let mut parsed = AgentSpec::parse(spec)?;
    if let (Some(depth), Some(config)) = (depth, parsed.minimax.as_mut()) {
        if !spec.contains(':') {
            config.depth = depth;
        }
    }
    Ok(parsed)
}

fn play(
    agent1: &str,
    agent2: &str,
    games: u32,
    depth: Option<u8>,
    max_moves: u32,
    out: Option<PathBuf>,
) -> Result<()> {
    let spec1 = agent_spec(agent1, depth)?;
    let spec2 = agent_spec(agent2, depth)?;
    let mut a1 = spec1.build().with_context(|| format!("cannot build agent '{agent1}'"))?;
    let mut a2 = spec2.build().with_context(|| format!("cannot build agent '{agent2}'"))?;

    let config = MatchConfig {
        games,
        max_moves,
        verbose: true,
        ..Default::default()
    };
    info!(agent1, agent2, games, "match started");

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(a1.as_mut(), a2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        agent1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out {
        let mut results = TournamentResults::new(
            &format!("{agent1} vs {agent2}"),
            vec![agent1.to_string(), agent2.to_string()],
            config,
        );
        results.add_match(agent1, agent2, result);
        results.save(&path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn run(config: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let file = TournamentFile::load(&config)?;
    info!(name = %file.name, agents = file.agents.len(), "tournament started");

    let results = run_round_robin(&file)?;
    results.print_report();

    if let Some(path) = out {
        results.save(&path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match args.cmd {
        Cmd::Play {
            agent1,
            agent2,
            games,
            depth,
            max_moves,
            out,
        } => play(&agent1, &agent2, games, depth, max_moves, out),
        Cmd::Run { config, out } => run(config, out),
        Cmd::Report { file } => {
            TournamentResults::load(&file)?.print_report();
            Ok(())
        }
    }
}
