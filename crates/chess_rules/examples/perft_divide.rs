//! Perft with per-move breakdown, for chasing move-generator bugs.
//!
//! Usage:
//!   cargo run --release --example perft_divide -p chess_rules -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 3 from the starting position
//!   cargo run --release --example perft_divide -p chess_rules
//!
//!   # Kiwipete at depth 2
//!   cargo run --release --example perft_divide -p chess_rules -- 2 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w"

use chess_rules::{move_to_coord, perft_divide, Board, START_FEN};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
    let fen = args.get(2).map(String::as_str).unwrap_or(START_FEN);

    let mut board = match Board::from_fen(fen) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("Position: {fen}");
    println!("Depth: {depth}");
    println!("{board}");
    println!();

    let start = Instant::now();
    let divide = perft_divide(&mut board, depth);
    let elapsed = start.elapsed();

    let mut total = 0u64;
    for (mv, nodes) in &divide {
        println!("{:<6} {nodes}", move_to_coord(*mv));
        total += nodes;
    }

    let nps = if elapsed.as_secs_f64() > 0.0 {
        total as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!();
    println!("Moves: {}", divide.len());
    println!("Nodes: {total}");
    println!("Time: {elapsed:.3?} ({nps:.0} nps)");
}
