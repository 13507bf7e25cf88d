use super::*;
use chess_rules::{Board, Move, SearchResult, Square};

/// Engine that always answers with the same move, or none.
struct FixedEngine(Option<Move>);

impl Engine for FixedEngine {
    fn search(&mut self, _board: &Board, depth: u8) -> SearchResult {
        SearchResult {
            best_move: self.0,
            score: 0,
            depth,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}

fn config(fen: &str, depth: u8) -> AutoplayConfig {
    AutoplayConfig {
        start_fen: fen.to_string(),
        depth,
        ..Default::default()
    }
}

fn script(moves: &[&str]) -> Vec<String> {
    moves.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_engine_delivers_mate() {
    let runner = Runner::new(config("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w", 2));
    let record = runner.play().unwrap();
    assert_eq!(record.result, Outcome::WhiteWins);
    assert_eq!(record.moves, script(&["e1e8"]));
    assert_eq!(record.plies, 1);
}

#[test]
fn test_engine_finishes_scripted_opening() {
    // Fool's mate after 1.f3 e5 2.g4, Black to move
    let mut cfg = config("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b", 2);
    cfg.white = PlayerKind::Scripted;
    let record = Runner::new(cfg).play().unwrap();
    assert_eq!(record.result, Outcome::BlackWins);
    assert_eq!(record.moves, script(&["d8h4"]));
}

#[test]
fn test_scripted_game() {
    let mut cfg = config(chess_rules::START_FEN, 3);
    cfg.white = PlayerKind::Scripted;
    cfg.black = PlayerKind::Scripted;
    cfg.scripted_moves = script(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    let record = Runner::new(cfg).play().unwrap();
    assert_eq!(record.result, Outcome::BlackWins);
    assert_eq!(record.plies, 4);
    assert_eq!(record.replay().unwrap().status(), chess_rules::GameStatus::Checkmate {
        winner: chess_rules::Colour::Black
    });
}

#[test]
fn test_illegal_scripted_move_is_rejected() {
    let mut cfg = config(chess_rules::START_FEN, 1);
    cfg.white = PlayerKind::Scripted;
    cfg.scripted_moves = script(&["e2e5"]);
    match Runner::new(cfg).play() {
        Err(AutoplayError::IllegalScriptedMove { ply, text }) => {
            assert_eq!(ply, 1);
            assert_eq!(text, "e2e5");
        }
        other => panic!("expected illegal move, got {other:?}"),
    }
}

#[test]
fn test_script_runs_out() {
    let mut cfg = config(chess_rules::START_FEN, 1);
    cfg.white = PlayerKind::Scripted;
    cfg.scripted_moves = script(&["e2e4"]);
    let record = Runner::new(cfg).play().unwrap();
    assert_eq!(record.result, Outcome::ScriptExhausted);
    assert_eq!(record.plies, 2);
}

#[test]
fn test_ply_limit() {
    let mut cfg = config(chess_rules::START_FEN, 1);
    cfg.max_plies = 4;
    let record = Runner::new(cfg).play().unwrap();
    assert_eq!(record.result, Outcome::MaxPlies);
    assert_eq!(record.moves.len(), 4);
}

#[test]
fn test_stalemate_start() {
    let record = Runner::new(config("7k/5Q2/6K1/8/8/8/8/8 b", 2)).play().unwrap();
    assert_eq!(record.result, Outcome::Stalemate);
    assert!(record.moves.is_empty());
}

#[test]
fn test_bad_start_fen() {
    let err = Runner::new(config("8/8/8/8/8/8/8/8 w", 2)).play().unwrap_err();
    assert!(matches!(err, AutoplayError::Rules(_)));
}

#[test]
fn test_run_writes_record() {
    let path = std::env::temp_dir().join(format!("autoplay-run-{}.json", std::process::id()));
    let mut cfg = config("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w", 2);
    cfg.record_path = Some(path.clone());
    cfg.parallel = true;
    let record = Runner::new(cfg).run().unwrap();
    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, record);
}

#[test]
fn test_engine_without_move_is_an_error() {
    let runner = Runner::new(config(chess_rules::START_FEN, 1));
    match runner.play_with(&mut FixedEngine(None)) {
        Err(AutoplayError::NoEngineMove { ply }) => assert_eq!(ply, 1),
        other => panic!("expected missing engine move, got {other:?}"),
    }
}

#[test]
fn test_illegal_engine_move_is_an_error() {
    // e2 to e5 is not a legal pawn move from the start
    let e2 = Square::new(6, 4).unwrap();
    let e5 = Square::new(3, 4).unwrap();
    let runner = Runner::new(config(chess_rules::START_FEN, 1));
    match runner.play_with(&mut FixedEngine(Some(Move::new(e2, e5)))) {
        Err(AutoplayError::IllegalEngineMove { ply, text }) => {
            assert_eq!(ply, 1);
            assert_eq!(text, "e2e5");
        }
        other => panic!("expected illegal engine move, got {other:?}"),
    }
}
