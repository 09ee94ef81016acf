//! Tests for the tic-tac-toe game engine.

use tictactoe_engine::{GameEngine, Marker, PlaceError, PlaceErrorKind, Placement, Position};

fn place_all(engine: &mut GameEngine, marker: Marker, cells: &[(i32, i32)]) {
    for &(row, col) in cells {
        engine
            .place_mark(marker, Position::new(row, col))
            .expect("placement should succeed");
    }
}

#[test]
fn test_new_engine_not_full() {
    let engine = GameEngine::new();
    assert!(!engine.is_board_full());
}

#[test]
fn test_new_engine_no_win() {
    let engine = GameEngine::new();
    assert!(!engine.check_for_win());
    assert_eq!(engine.winner(), None);
}

#[test]
fn test_x_moves_first() {
    assert_eq!(GameEngine::new().current_turn(), Marker::X);
    assert_eq!(GameEngine::default().current_turn(), Marker::X);
}

#[test]
fn test_switch_turn_changes_marker() {
    let mut engine = GameEngine::new();
    engine.switch_turn();
    assert_eq!(engine.current_turn(), Marker::O);
}

#[test]
fn test_switch_turn_twice_restores() {
    let mut engine = GameEngine::new();
    engine.switch_turn();
    engine.switch_turn();
    assert_eq!(engine.current_turn(), Marker::X);
}

#[test]
fn test_place_mark_does_not_switch_turn() {
    let mut engine = GameEngine::new();
    engine.place_mark(Marker::X, Position::new(1, 2)).unwrap();
    assert_eq!(engine.current_turn(), Marker::X);
    assert_eq!(engine.board().get(Position::new(1, 2)), Some(Marker::X));

    // Without a switch the same marker is still on turn.
    assert!(engine.place_mark(Marker::X, Position::new(1, 1)).is_ok());
}

#[test]
fn test_same_marker_after_switch_is_out_of_turn() {
    let mut engine = GameEngine::new();
    engine.place_mark(Marker::X, Position::new(1, 2)).unwrap();
    engine.switch_turn();

    let err = engine
        .place_mark(Marker::X, Position::new(1, 1))
        .unwrap_err();
    assert_eq!(
        err,
        PlaceError::OutOfTurn {
            expected: Marker::O,
            attempted: Marker::X,
        }
    );
    assert_eq!(err.to_string(), "It is not your turn!");
}

#[test]
fn test_o_cannot_open() {
    let mut engine = GameEngine::new();
    let err = engine
        .place_mark(Marker::O, Position::new(0, 0))
        .unwrap_err();
    assert_eq!(err.kind(), PlaceErrorKind::OutOfTurn);
}

#[test]
fn test_already_marked() {
    let mut engine = GameEngine::new();
    engine.place_mark(Marker::X, Position::new(1, 1)).unwrap();
    engine.switch_turn();

    let err = engine
        .place_mark(Marker::O, Position::new(1, 1))
        .unwrap_err();
    assert_eq!(err.kind(), PlaceErrorKind::AlreadyMarked);
    assert_eq!(err.to_string(), "Already marked!");
    assert_eq!(engine.board().get(Position::new(1, 1)), Some(Marker::X));
}

#[test]
fn test_out_of_range() {
    for (row, col) in [(4, 1), (-1, 1), (1, 4), (1, -1)] {
        let mut engine = GameEngine::new();
        let err = engine
            .place_mark(Marker::X, Position::new(row, col))
            .unwrap_err();
        assert_eq!(
            err,
            PlaceError::OutOfRange {
                position: Position::new(row, col)
            }
        );
        assert_eq!(err.to_string(), "Range is not in board!");
    }
}

#[test]
fn test_coordinate_three_is_out_of_range() {
    for (row, col) in [(3, 0), (0, 3), (3, 3)] {
        let mut engine = GameEngine::new();
        let err = engine
            .place_mark(Marker::X, Position::new(row, col))
            .unwrap_err();
        assert_eq!(err.kind(), PlaceErrorKind::OutOfRange);
    }
}

#[test]
fn test_failed_placement_leaves_engine_unchanged() {
    let mut engine = GameEngine::new();
    engine.place_mark(Marker::X, Position::new(0, 0)).unwrap();
    let before = engine.clone();

    assert!(engine.place_mark(Marker::O, Position::new(2, 2)).is_err());
    assert!(engine.place_mark(Marker::X, Position::new(9, 9)).is_err());
    assert!(engine.place_mark(Marker::X, Position::new(0, 0)).is_err());
    assert_eq!(engine, before);
}

#[test]
fn test_row_win() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, Marker::X, &[(0, 0), (0, 1), (0, 2)]);
    assert!(engine.check_for_win());
    assert_eq!(engine.winner(), Some(Marker::X));
}

#[test]
fn test_column_win() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, Marker::X, &[(0, 0), (1, 0), (2, 0)]);
    assert!(engine.check_for_win());
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, Marker::X, &[(0, 0), (1, 1), (2, 2)]);
    assert!(engine.check_for_win());
}

#[test]
fn test_anti_diagonal_win_for_o() {
    let mut engine = GameEngine::new();
    engine.switch_turn();
    place_all(&mut engine, Marker::O, &[(0, 2), (1, 1), (2, 0)]);
    assert_eq!(engine.winner(), Some(Marker::O));
}

#[test]
fn test_alternating_game_to_full_board() {
    // X O X / X O O / O X X, no line complete.
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let mut engine = GameEngine::new();
    for (row, col) in moves {
        assert!(!engine.is_board_full());
        let marker = engine.current_turn();
        engine.place_mark(marker, Position::new(row, col)).unwrap();
        engine.switch_turn();
    }
    assert!(engine.is_board_full());
    assert!(!engine.check_for_win());
}

#[test]
fn test_moves_accepted_after_win() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, Marker::X, &[(0, 0), (0, 1), (0, 2)]);
    assert!(engine.check_for_win());

    engine.switch_turn();
    assert!(engine.place_mark(Marker::O, Position::new(2, 2)).is_ok());
    assert!(engine.check_for_win());
}

#[test]
fn test_queries_are_repeatable() {
    let mut engine = GameEngine::new();
    place_all(&mut engine, Marker::X, &[(0, 0), (1, 1)]);
    let win = engine.check_for_win();
    let full = engine.is_board_full();
    for _ in 0..3 {
        assert_eq!(engine.check_for_win(), win);
        assert_eq!(engine.is_board_full(), full);
    }
}

#[test]
fn test_try_place_matches_place_mark() {
    let mut engine = GameEngine::new();
    let placement = Placement::new(Marker::X, Position::new(2, 1));
    engine.try_place(placement).unwrap();
    assert_eq!(engine.board().get(placement.position()), Some(Marker::X));
    assert_eq!(
        engine.try_place(placement).unwrap_err().kind(),
        PlaceErrorKind::AlreadyMarked
    );
}

#[test]
fn test_engine_serializes_board_and_turn() {
    let mut engine = GameEngine::new();
    engine.place_mark(Marker::X, Position::new(0, 0)).unwrap();
    engine.switch_turn();

    let json = serde_json::to_value(&engine).unwrap();
    assert_eq!(json["turn"], "O");
    assert_eq!(json["board"]["squares"][0], "X");
    assert_eq!(json["board"]["squares"][1], "Empty");
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GameEngine>();
}
