//! Game runner for automated play

use chess_rules::{move_to_coord, parse_coord_move, Engine, Game};
use minimax_engine::MinimaxEngine;
use tracing::{debug, info};

use crate::config::{AutoplayConfig, PlayerKind};
use crate::error::{AutoplayError, Result};
use crate::record::{GameRecord, Outcome};

/// Plays one game per call according to its config
pub struct Runner {
    config: AutoplayConfig,
}

impl Runner {
    pub fn new(config: AutoplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AutoplayConfig {
        &self.config
    }

    /// Play a game and write its record if `record_path` is set
    pub fn run(&self) -> Result<GameRecord> {
        let record = self.play()?;
        if let Some(path) = &self.config.record_path {
            record.save(path)?;
            info!(path = %path.display(), "game record written");
        }
        Ok(record)
    }

    /// Play a single game with the minimax engine on the engine side(s)
    pub fn play(&self) -> Result<GameRecord> {
        let mut engine = if self.config.parallel {
            MinimaxEngine::parallel()
        } else {
            MinimaxEngine::new()
        };
        self.play_with(&mut engine)
    }

    /// Play a single game until mate, stalemate, the ply limit or the end of the script
    pub fn play_with(&self, engine: &mut dyn Engine) -> Result<GameRecord> {
        let mut game = Game::from_fen(&self.config.start_fen)?;
        engine.new_game();

        let mut script = self.config.scripted_moves.iter();
        let mut moves = Vec::new();
        let mut plies: u32 = 0;

        info!(
            fen = %self.config.start_fen,
            depth = self.config.depth,
            white = ?self.config.white,
            black = ?self.config.black,
            engine = engine.name(),
            "starting game"
        );

        let outcome = loop {
            if let Some(outcome) = Outcome::from_status(game.status()) {
                break outcome;
            }
            if plies >= self.config.max_plies {
                break Outcome::MaxPlies;
            }

            let mover = game.side_to_move();
            let mv = match self.config.player(mover) {
                PlayerKind::Engine => {
                    let result = engine.search(game.board(), self.config.depth);
                    debug!(nodes = result.nodes, score = result.score, "engine searched");
                    result.best_move.ok_or(AutoplayError::NoEngineMove { ply: plies + 1 })?
                }
                PlayerKind::Scripted => {
                    let Some(text) = script.next() else {
                        break Outcome::ScriptExhausted;
                    };
                    parse_coord_move(game.board(), text).ok_or_else(|| {
                        AutoplayError::IllegalScriptedMove {
                            ply: plies + 1,
                            text: text.clone(),
                        }
                    })?
                }
            };

            let coord = move_to_coord(mv);
            let played = game
                .play_move(mv)
                .ok_or_else(|| AutoplayError::IllegalEngineMove {
                    ply: plies + 1,
                    text: coord.clone(),
                })?;
            plies += 1;
            info!(
                ply = plies,
                colour = ?mover,
                mv = %coord,
                capture = ?played.captured.map(|pc| pc.kind),
                check = played.gives_check,
                "move played"
            );
            moves.push(coord);
        };

        info!(result = outcome.score(), ?outcome, plies, "game finished");
        debug!("final position\n{}", game.board());

        Ok(GameRecord {
            start_fen: self.config.start_fen.clone(),
            depth: self.config.depth,
            moves,
            result: outcome,
            plies,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
