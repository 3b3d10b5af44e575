//! Tournament Runner for Quixo players
//!
//! This crate provides infrastructure for:
//! - Playing matches between any two [`quixo_core::Agent`]s
//! - Round-robin tournaments described in a TOML file
//! - JSON reports of the results
//!
//! # Usage
//!
//! ```bash
//! # Minimax at depth 3 against a seeded random player
//! cargo run -p tournament -- play minimax:3 random:7 --games 20
//!
//! # Round robin from a file, results saved as JSON
//! cargo run -p tournament -- run --config tournament.toml --out results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
