//! Tests for self-play sessions and game records.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_qubic::{
    Board, GameRecord, GameStatus, Move, PackedMove, PlacementError, SelfPlay, SessionError,
    WinDetector,
};

#[test]
fn test_self_play_reaches_terminal_state() {
    for seed in 0..8 {
        let record = SelfPlay::new(StdRng::seed_from_u64(seed)).run().unwrap();
        assert!(record.status().is_over(), "seed {seed} ended {:?}", record.status());
        assert!(!record.moves().is_empty());
        assert!(record.moves().len() <= 64);
    }
}

#[test]
fn test_step_reports_each_turn() {
    let mut game = SelfPlay::new(StdRng::seed_from_u64(3));
    let first = game.step().unwrap().unwrap();
    assert_eq!(first.player, strictly_qubic::Player::A);
    assert_eq!(first.status, GameStatus::InProgress);
    assert_eq!(game.history(), &[first.mv.pack()]);

    let second = game.step().unwrap().unwrap();
    assert_eq!(second.player, strictly_qubic::Player::B);
    assert_ne!(second.mv, first.mv);
}

#[test]
fn test_step_after_game_over_is_none() {
    let mut game = SelfPlay::new(StdRng::seed_from_u64(17));
    while game.step().unwrap().is_some() {}
    let moves = game.history().len();
    assert!(game.step().unwrap().is_none());
    assert_eq!(game.history().len(), moves);
}

#[test]
fn test_same_seed_same_game() {
    let a = SelfPlay::new(StdRng::seed_from_u64(99)).run().unwrap();
    let b = SelfPlay::new(StdRng::seed_from_u64(99)).run().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_winning_move_ends_game() {
    let record = SelfPlay::new(StdRng::seed_from_u64(5)).run().unwrap();
    let board = record.replay().unwrap();
    assert_eq!(WinDetector::evaluate(&board), *record.status());

    // The game stops on the first terminal move, so every prefix is live.
    let mut partial = Board::new();
    for packed in &record.moves()[..record.moves().len() - 1] {
        partial.place_packed(*packed).unwrap();
        assert_eq!(WinDetector::evaluate(&partial), GameStatus::InProgress);
    }
}

#[test]
fn test_record_json_round_trip_through_file() {
    let record = SelfPlay::new(StdRng::seed_from_u64(21)).run().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");
    std::fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

    let loaded: GameRecord =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, record);
    assert!(loaded.replay().is_ok());
}

#[test]
fn test_record_stores_plain_integers() {
    let record = GameRecord::new(vec![Move::new(1, 2, 3).pack()], GameStatus::InProgress);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(&0x123.to_string()), "{json}");
}

#[test]
fn test_replay_rejects_out_of_range() {
    let bad = PackedMove::from(0x004);
    let record = GameRecord::new(vec![bad], GameStatus::InProgress);
    assert_eq!(record.replay(), Err(SessionError::OutOfRange(bad)));
}

#[test]
fn test_replay_rejects_occupied_cell() {
    let mv = Move::new(0, 0, 0).pack();
    let record = GameRecord::new(vec![mv, mv], GameStatus::InProgress);
    assert_eq!(
        record.replay(),
        Err(SessionError::Placement(PlacementError::Occupied))
    );
}

#[test]
fn test_replay_rejects_wrong_status() {
    let record = GameRecord::new(vec![Move::new(2, 2, 2).pack()], GameStatus::Draw);
    assert_eq!(
        record.replay(),
        Err(SessionError::StatusMismatch {
            recorded: GameStatus::Draw,
            replayed: GameStatus::InProgress,
        })
    );
}

#[test]
fn test_replay_rejects_moves_after_win() {
    // A completes the x line through (_, 0, 0) on ply 7; B then plays on.
    let moves = [
        (0, 0, 0),
        (1, 1, 1),
        (1, 0, 0),
        (2, 2, 2),
        (2, 0, 0),
        (1, 2, 3),
        (3, 0, 0),
        (3, 3, 3),
    ];
    let packed: Vec<PackedMove> = moves
        .iter()
        .map(|&(x, y, z)| Move::new(x, y, z).pack())
        .collect();

    let finished = GameRecord::new(packed[..7].to_vec(), GameStatus::Won(strictly_qubic::Player::A));
    assert!(finished.replay().is_ok());

    let overlong = GameRecord::new(packed, GameStatus::Won(strictly_qubic::Player::A));
    assert_eq!(
        overlong.replay(),
        Err(SessionError::MoveAfterGameOver(Move::new(3, 3, 3).pack()))
    );
}
