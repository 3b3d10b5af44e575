//! Perft benchmark for profiling move generation with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p quixo_core -- [depth] [board]
//!
//! Examples:
//!   # Default: depth 4 over the built-in positions
//!   cargo run --release --example perft_bench -p quixo_core
//!
//!   # Custom depth and position (X to move)
//!   cargo run --release --example perft_bench -p quixo_core -- 4 "X...O/.O.../..X../...X./O...X"

use quixo_core::{perft, Board, Symbol};
use std::env;
use std::time::Instant;

/// Test positions covering empty, sparse and crowded boards
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Empty board", "...../...../...../...../....."),
    ("Opening", "X...O/...../..X../...../O...."),
    ("Middlegame", "XO.OX/O...X/..X../X...O/OX.XO"),
    ("Crowded", "XOXOX/OXOXO/X.O.X/OXOXO/XOXO."),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(notation) = args.get(2) {
        match Board::from_notation(notation) {
            Ok(board) => run_single_position(&board, depth),
            Err(e) => eprintln!("Invalid board: {e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(board: &Board, depth: u8) {
    println!("Position: {board}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(board, Symbol::X, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed.as_secs_f64()));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, notation) in TEST_POSITIONS {
        let Ok(board) = Board::from_notation(notation) else {
            eprintln!("{name}: invalid board");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Symbol::X, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed.as_secs_f64())
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time.as_secs_f64())
    );
}

fn nps(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}
