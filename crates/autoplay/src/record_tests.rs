use super::*;
use chess_rules::START_FEN;

fn fools_mate() -> GameRecord {
    GameRecord {
        start_fen: START_FEN.to_string(),
        depth: 3,
        moves: ["f2f3", "e7e5", "g2g4", "d8h4"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        result: Outcome::BlackWins,
        plies: 4,
    }
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("autoplay-record-{}.json", std::process::id()));
    let record = fools_mate();
    record.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"result\": \"black_wins\""));

    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, record);
}

#[test]
fn test_load_rejects_malformed_json() {
    let path = std::env::temp_dir().join(format!("autoplay-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ \"start_fen\": 3 }").unwrap();
    let err = GameRecord::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, AutoplayError::Json(_)));
}

#[test]
fn test_replay_reaches_recorded_result() {
    let record = fools_mate();
    let game = record.replay().unwrap();
    assert_eq!(Outcome::from_status(game.status()), Some(record.result));
}

#[test]
fn test_replay_rejects_illegal_move() {
    let mut record = fools_mate();
    record.moves[2] = "g2g5".to_string();
    match record.replay() {
        Err(AutoplayError::IllegalScriptedMove { ply, text }) => {
            assert_eq!(ply, 3);
            assert_eq!(text, "g2g5");
        }
        other => panic!("expected illegal move, got {other:?}"),
    }
}

#[test]
fn test_outcome_scores() {
    assert_eq!(Outcome::WhiteWins.score(), "1-0");
    assert_eq!(Outcome::Stalemate.score(), "1/2-1/2");
    assert_eq!(Outcome::MaxPlies.score(), "*");
    assert_eq!(Outcome::from_status(GameStatus::Ongoing), None);
}
