//! Autoplay CLI
//!
//! Play the minimax engine against itself or a move script, or ask it for one move.

use anyhow::{bail, Context};
use autoplay::{AutoplayConfig, Runner};
use chess_rules::{move_to_coord, Board};
use minimax_engine::{search_root, search_root_parallel};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Autoplay");
    println!();
    println!("Usage:");
    println!("  autoplay [--config FILE] [--depth D] [--fen FEN] [--max-plies N] [--record FILE] [--parallel]");
    println!("  autoplay best <fen> [--depth D]");
    println!();
    println!("Config keys (TOML):");
    println!("  start_fen, depth, white, black, scripted_moves, max_plies, parallel, record_path");
    println!("  white/black are \"engine\" or \"scripted\"");
    println!();
    println!("Examples:");
    println!("  autoplay --depth 2 --max-plies 40 --record game.json");
    println!("  autoplay best \"6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w\"");
}

/// Value following a flag
fn flag_value<'a>(args: &'a [String], i: usize) -> anyhow::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} needs a value", args[i]))
}

fn run_game(args: &[String]) -> anyhow::Result<()> {
    // The config file comes first so that the other flags override it
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => {
            let path = flag_value(args, i)?;
            AutoplayConfig::load(path.as_ref())
                .with_context(|| format!("Failed to load config {}", path))?
        }
        None => AutoplayConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => i += 1,
            "--depth" | "-d" => {
                config.depth = flag_value(args, i)?.parse().context("Invalid depth")?;
                i += 1;
            }
            "--fen" => {
                config.start_fen = flag_value(args, i)?.to_string();
                i += 1;
            }
            "--max-plies" => {
                config.max_plies = flag_value(args, i)?.parse().context("Invalid ply limit")?;
                i += 1;
            }
            "--record" | "-r" => {
                config.record_path = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--parallel" => config.parallel = true,
            other => bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let record = Runner::new(config).run()?;
    println!("{} after {} plies ({:?})", record.result.score(), record.plies, record.result);
    println!("{}", record.moves.join(" "));
    Ok(())
}

fn run_best(args: &[String]) -> anyhow::Result<()> {
    let Some(fen) = args.first() else {
        bail!("best requires a FEN");
    };

    let mut depth = minimax_engine::DEFAULT_DEPTH;
    let mut parallel = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => {
                depth = flag_value(args, i)?.parse().context("Invalid depth")?;
                i += 1;
            }
            "--parallel" => parallel = true,
            other => bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let board = Board::from_fen(fen)?;
    println!("{}", board);

    let colour = board.side_to_move();
    let outcome = if parallel {
        search_root_parallel(&board, colour, depth)
    } else {
        search_root(&board, colour, depth)
    };
    info!(nodes = outcome.nodes, depth, "search done");

    match outcome.best_move {
        Some((mv, score)) => println!("bestmove {} score {}", move_to_coord(mv), score),
        None if board.in_check(colour) => println!("no legal moves: checkmate"),
        None => println!("no legal moves: stalemate"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("best") => run_best(&args[2..]),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        _ => run_game(&args[1..]),
    }
}
