//! Tests for the snapshot timeline: moves, jumps and branch overwrite.

use replay_tictactoe::{
    Board, JumpError, MoveError, Player, Position, Square, Timeline, Verdict, evaluate,
};

fn marks(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|s| match s {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        })
        .collect()
}

#[test]
fn test_diagonal_opening_stays_ongoing() {
    let timeline = Timeline::from_moves(&[0, 4, 8]).expect("legal moves");
    assert_eq!(marks(timeline.current()), "X___O___X");
    assert_eq!(timeline.verdict(), Verdict::Ongoing);
}

#[test]
fn test_continuing_to_cells_one_and_two() {
    let timeline = Timeline::from_moves(&[0, 4, 8, 1, 2]).expect("legal moves");
    assert_eq!(marks(timeline.current()), "XOX_O___X");
    // O holds the center, so no diagonal is complete.
    assert_eq!(timeline.verdict(), Verdict::Ongoing);
    assert_eq!(timeline.to_move(), Player::O);
}

#[test]
fn test_main_diagonal_win() {
    let timeline = Timeline::from_moves(&[0, 1, 4, 2, 8]).expect("legal moves");
    assert_eq!(marks(timeline.current()), "XOO_X___X");
    let verdict = timeline.verdict();
    assert_eq!(verdict.winner(), Some(Player::X));
    assert_eq!(verdict.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
}

#[test]
fn test_jump_to_start_then_move_discards_future() {
    let mut timeline = Timeline::from_moves(&[0, 4, 8, 1, 2]).expect("legal moves");
    assert_eq!(timeline.history_len(), 6);

    timeline.jump_to(0).expect("in range");
    timeline.apply_move(0).expect("legal move");

    assert_eq!(timeline.history_len(), 2);
    assert_eq!(timeline.cursor(), 1);
    assert_eq!(marks(timeline.current()), "X________");
    assert!(timeline.snapshot(2).is_none());
}

#[test]
fn test_branch_overwrite_length_is_cursor_plus_two() {
    let moves = [4, 0, 8, 2, 1, 7];
    for k in 0..moves.len() {
        let mut timeline = Timeline::from_moves(&moves).expect("legal moves");
        let len = timeline.history_len();
        assert!(k < len - 1);

        timeline.jump_to(k).expect("in range");
        let open = timeline.current().empty_positions()[0];
        timeline.apply_move(open.to_index()).expect("legal move");

        assert_eq!(timeline.history_len(), k + 2, "branching from {}", k);
        assert_eq!(timeline.cursor(), k + 1);
    }
}

#[test]
fn test_occupied_cell_rejected_twice_without_change() {
    let mut timeline = Timeline::new();
    timeline.apply_move(4).expect("legal move");
    let after_first = timeline.clone();

    assert_eq!(
        timeline.apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(timeline, after_first);
    assert_eq!(
        timeline.apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(timeline, after_first);
}

#[test]
fn test_move_after_win_rejected() {
    let mut timeline = Timeline::from_moves(&[0, 3, 1, 4, 2]).expect("legal moves");
    assert_eq!(timeline.verdict().winner(), Some(Player::X));

    let before = timeline.clone();
    assert_eq!(timeline.apply_move(8), Err(MoveError::GameOver));
    assert_eq!(timeline, before);
}

#[test]
fn test_rewind_past_win_reopens_play() {
    let mut timeline = Timeline::from_moves(&[0, 3, 1, 4, 2]).expect("legal moves");
    timeline.jump_to(4).expect("in range");
    assert_eq!(timeline.verdict(), Verdict::Ongoing);
    assert_eq!(timeline.apply_move(8), Ok(Verdict::Ongoing));
    assert_eq!(timeline.history_len(), 6);
}

#[test]
fn test_turn_parity_alternates() {
    let mut timeline = Timeline::new();
    for (n, cell) in [4, 0, 2, 6, 3, 5, 1, 7, 8].into_iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(timeline.to_move(), expected);
        timeline.apply_move(cell).expect("legal move");
        let placed = timeline.move_at(timeline.cursor()).expect("move recorded");
        assert_eq!(placed.player(), expected);
    }
}

#[test]
fn test_full_game_draw() {
    // O X X / X X O / O O X
    let timeline = Timeline::from_moves(&[4, 0, 2, 6, 3, 5, 1, 7, 8]).expect("legal moves");
    assert_eq!(marks(timeline.current()), "OXXXXOOOX");
    assert_eq!(timeline.verdict(), Verdict::Draw);
    assert_eq!(timeline.status().to_string(), "Draw");
}

#[test]
fn test_jump_does_not_alter_snapshots() {
    let mut timeline = Timeline::from_moves(&[0, 4, 8]).expect("legal moves");
    let snapshots = timeline.snapshots().to_vec();

    for index in [2, 0, 3, 1] {
        timeline.jump_to(index).expect("in range");
        assert_eq!(timeline.snapshots(), snapshots.as_slice());
        assert_eq!(timeline.current(), &snapshots[index]);
        assert!(timeline.is_current(index));
    }

    assert_eq!(
        timeline.jump_to(4),
        Err(JumpError::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(timeline.cursor(), 1);
}

#[test]
fn test_snapshot_matches_evaluate() {
    let timeline = Timeline::from_moves(&[0, 3, 1, 4, 2]).expect("legal moves");
    for board in timeline.snapshots() {
        assert_eq!(evaluate(board), evaluate(board));
    }
    assert_eq!(timeline.verdict(), evaluate(timeline.current()));
}

#[test]
fn test_timeline_serializes() {
    let timeline = Timeline::from_moves(&[4]).expect("legal move");
    let json = serde_json::to_value(&timeline).expect("serializable");
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_timeline_json_round_trip() {
    let mut timeline = Timeline::from_moves(&[0, 1, 4, 2, 8]).expect("legal moves");
    timeline.jump_to(3).expect("in range");
    let json = serde_json::to_string(&timeline).expect("serializable");
    let decoded: Timeline = serde_json::from_str(&json).expect("valid timeline");
    assert_eq!(decoded, timeline);
    assert_eq!(decoded.verdict(), Verdict::Ongoing);
}

#[test]
fn test_deserialize_rejects_empty_history() {
    let result = serde_json::from_str::<Timeline>(r#"{"snapshots":[],"cursor":3}"#);
    let error = result.expect_err("empty history");
    assert!(error.to_string().contains("Invalid timeline"), "{}", error);
}

#[test]
fn test_deserialize_rejects_cursor_past_end() {
    let timeline = Timeline::from_moves(&[4]).expect("legal move");
    let mut json = serde_json::to_value(&timeline).expect("serializable");
    json["cursor"] = 2.into();
    assert!(serde_json::from_value::<Timeline>(json).is_err());
}

#[test]
fn test_deserialize_rejects_multi_cell_step() {
    let o_row = Board::new()
        .with_mark(Position::TopLeft, Player::O)
        .with_mark(Position::TopCenter, Player::O)
        .with_mark(Position::TopRight, Player::O);
    let json = serde_json::json!({
        "snapshots": [Board::new(), o_row],
        "cursor": 1,
    });
    assert!(serde_json::from_value::<Timeline>(json).is_err());
}
