//! Automated play for the minimax engine
//!
//! This crate provides:
//! - A TOML-configured runner pitting the engine against itself or a move script
//! - Per-move logging through `tracing`
//! - JSON records of finished games
//!
//! # Usage
//!
//! ```bash
//! # Engine vs engine from the start position, depth 3
//! cargo run -p autoplay -- --depth 3 --record game.json
//!
//! # Settings from a file, with a depth override
//! cargo run -p autoplay -- --config autoplay.toml --depth 2
//!
//! # Best move for one position
//! cargo run -p autoplay -- best "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w"
//! ```

mod config;
mod error;
mod record;
mod runner;

pub use config::*;
pub use error::*;
pub use record::*;
pub use runner::*;
