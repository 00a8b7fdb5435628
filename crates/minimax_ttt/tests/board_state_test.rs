//! Tests for state representation: terminality, scoring and successors.

use minimax_ttt::score::{DRAW, MAX_WIN, MIN_WIN};
use minimax_ttt::{Board, Cell, Mark, MoveError, Position, State};

fn state(board: &str, just_played: Mark) -> State {
    State::from_parts(board.parse().unwrap(), Some(just_played), just_played.opponent())
        .expect("valid state")
}

#[test]
fn test_o_completing_row_column_diagonal_scores_plus_ten() {
    for board in ["OOO/XX./X..", "OX./OX./O.X", "OX./XO./..O"] {
        let s = state(board, Mark::O);
        assert!(s.is_win(), "{board}");
        assert_eq!(s.value(), Some(MAX_WIN), "{board}");
    }
}

#[test]
fn test_x_completing_line_scores_minus_ten() {
    for board in ["XXX/OO./O..", "X.O/XO./X..", "O.X/.XO/X.."] {
        let s = state(board, Mark::X);
        assert!(s.is_win(), "{board}");
        assert_eq!(s.value(), Some(MIN_WIN), "{board}");
    }
}

#[test]
fn test_full_board_without_line_scores_zero() {
    let s = state("XOX/XOO/OXX", Mark::X);
    assert!(s.is_draw());
    assert_eq!(s.value(), Some(DRAW));
}

#[test]
fn test_win_takes_precedence_over_full_board() {
    let s = state("XOX/OXO/OXX", Mark::X);
    assert!(s.is_win());
    assert!(!s.is_draw());
    assert!(s.is_terminal());
}

#[test]
fn test_concrete_scenario_single_empty_cell() {
    let s = state("XXO/XOX/.OO", Mark::O);
    assert!(!s.is_win());
    assert!(!s.is_draw());
    assert_eq!(s.next_to_play(), Mark::X);

    let children: Vec<(Position, State)> = s.successors().collect();
    assert_eq!(children.len(), 1);

    let (pos, child) = children[0];
    assert_eq!(pos, Position::BottomLeft);
    assert_eq!((pos.row(), pos.col()), (2, 0));
    assert_eq!(child.board().get(Position::BottomLeft), Cell::Occupied(Mark::X));
    assert_eq!(child.just_played(), Some(Mark::X));
    assert_eq!(child.next_to_play(), Mark::O);

    // X completes the left column.
    assert!(child.is_terminal());
    assert_eq!(child.value(), Some(MIN_WIN));
    assert_eq!(
        child.winning_line(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
}

#[test]
fn test_children_fill_each_empty_cell_once() {
    let parent = state("X.O/.X./..O", Mark::O);
    let empty = parent.board().empty_positions();
    let children: Vec<State> = parent.children().collect();
    assert_eq!(children.len(), empty.len());

    for (child, pos) in children.iter().zip(&empty) {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| child.board().get(*p) != parent.board().get(*p))
            .collect();
        assert_eq!(changed, vec![*pos]);
        assert_eq!(child.board().get(*pos), Cell::Occupied(parent.next_to_play()));
        assert_eq!(child.just_played(), Some(parent.next_to_play()));
        assert_eq!(child.next_to_play(), parent.just_played().unwrap());
    }
}

#[test]
fn test_children_are_independent_copies() {
    let parent = State::initial(Mark::O);
    let mut children: Vec<State> = parent.children().collect();
    children[0].play(Position::Center).unwrap();

    assert!(children[1].board().is_empty_at(Position::Center));
    assert!(parent.board().is_blank());
}

#[test]
fn test_children_generation_is_repeatable() {
    let parent = state("X../.O./...", Mark::O);
    let first: Vec<State> = parent.children().collect();
    let second: Vec<State> = parent.children().collect();
    assert_eq!(first, second);
}

#[test]
fn test_terminal_state_has_no_children() {
    assert_eq!(state("OOO/XX./X..", Mark::O).children().count(), 0);
    assert_eq!(state("XOX/XOO/OXX", Mark::X).children().count(), 0);
}

#[test]
fn test_from_parts_rejects_same_mover_twice() {
    let board: Board = "X../.../...".parse().unwrap();
    let err = State::from_parts(board, Some(Mark::X), Mark::X).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert!(err.to_string().contains("alternate"));
}

#[test]
fn test_from_parts_rejects_imbalanced_marks() {
    let board: Board = "XX./X../O..".parse().unwrap();
    assert!(State::from_parts(board, Some(Mark::X), Mark::O).is_err());
}

#[test]
fn test_from_parts_rejects_play_after_loss() {
    let board: Board = "OOO/XX./X.X".parse().unwrap();
    assert!(State::from_parts(board, Some(Mark::X), Mark::O).is_err());
}

#[test]
fn test_from_parts_accepts_placeholder_mover_on_empty_board() {
    let s = State::from_parts(Board::new(), Some(Mark::X), Mark::O).unwrap();
    assert!(!s.is_win());
    assert_eq!(s.children().count(), 9);
}

#[test]
fn test_play_rejects_occupied_cell() {
    let mut s = state("X../.../...", Mark::X);
    assert_eq!(
        s.play(Position::TopLeft),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    s.play(Position::Center).unwrap();
    assert_eq!(s.next_to_play(), Mark::X);
}

#[test]
fn test_state_serializes_to_json() {
    let s = state("XXO/XOX/.OO", Mark::O);
    let json = serde_json::to_string(&s).unwrap();
    let back: State = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn test_deserializing_invalid_state_fails() {
    // X moved twice in a row and is to move again.
    let json = r#"{
        "board": {"cells": [{"Occupied": "X"}, {"Occupied": "X"},
                            "Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"]},
        "just_played": "X",
        "next_to_play": "X"
    }"#;
    let err = serde_json::from_str::<State>(json).unwrap_err();
    assert!(err.to_string().starts_with("Invalid state:"), "{err}");
}

#[test]
fn test_deserializing_valid_state_succeeds() {
    let json = r#"{
        "board": {"cells": [{"Occupied": "X"}, "Empty", "Empty", "Empty",
                            "Empty", "Empty", "Empty", "Empty", "Empty"]},
        "just_played": "X",
        "next_to_play": "O"
    }"#;
    let s: State = serde_json::from_str(json).unwrap();
    assert_eq!(s, state("X../.../...", Mark::X));
}
