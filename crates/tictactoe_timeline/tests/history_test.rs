//! End-to-end tests for the history controller.

use tictactoe_timeline::{GameHistory, Line, Outcome, Player, Position, Square};

fn play(indices: &[usize]) -> GameHistory {
    let mut game = GameHistory::new();
    for &index in indices {
        game.apply_move(index);
    }
    game
}

#[test]
fn test_initial_state() {
    let game = GameHistory::new();

    assert_eq!(game.move_count(), 0);
    assert_eq!(game.snapshot_count(), 1);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(
        Position::ALL
            .iter()
            .all(|&pos| game.current_board().is_empty(pos))
    );
}

#[test]
fn test_players_alternate() {
    let mut game = GameHistory::new();

    for (turn, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let expected = if turn % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.current_player(), expected);
        game.apply_move(index);
    }
}

#[test]
fn test_history_grows_one_snapshot_per_move() {
    let mut game = GameHistory::new();

    for (moves, index) in [4, 0, 8, 2].into_iter().enumerate() {
        game.apply_move(index);
        assert_eq!(game.snapshot_count(), moves + 2);
        assert_eq!(game.current_step(), moves + 1);
        assert_eq!(game.snapshot_count(), game.move_count() + 1);
    }
}

#[test]
fn test_occupied_square_ignored() {
    let mut game = play(&[4]);
    let before = game.clone();

    game.apply_move(4);

    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_out_of_bounds_ignored() {
    let mut game = play(&[4]);
    let before = game.clone();

    game.apply_move(9);
    game.apply_move(usize::MAX);

    assert_eq!(game, before);
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 3, 1, 4, 2]);

    assert_eq!(
        game.outcome(),
        Outcome::Won {
            winner: Player::X,
            line: Line::TopRow,
        }
    );
    assert_eq!(game.status_line(), "Winner: X");
}

#[test]
fn test_left_column_win() {
    let game = play(&[0, 1, 3, 2, 6]);

    assert_eq!(
        game.outcome(),
        Outcome::Won {
            winner: Player::X,
            line: Line::LeftColumn,
        }
    );
}

#[test]
fn test_main_diagonal_win() {
    let game = play(&[0, 1, 4, 2, 8]);

    assert_eq!(
        game.outcome(),
        Outcome::Won {
            winner: Player::X,
            line: Line::MainDiagonal,
        }
    );
}

#[test]
fn test_o_can_win() {
    // X scatters while O completes the middle row.
    let game = play(&[0, 3, 1, 4, 8, 5]);

    assert_eq!(
        game.outcome(),
        Outcome::Won {
            winner: Player::O,
            line: Line::MiddleRow,
        }
    );
    assert_eq!(game.status_line(), "Winner: O");
}

#[test]
fn test_move_after_win_ignored() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let before = game.clone();

    game.apply_move(5);

    assert_eq!(game, before);
    assert_eq!(game.current_board().get(Position::MiddleRight), Square::Empty);
}

#[test]
fn test_draw() {
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.status_line(), "Draw");
}

#[test]
fn test_jump_rewinds_board() {
    let mut game = play(&[0, 1]);

    game.jump_to(1);

    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.current_board().get(Position::TopCenter), Square::Empty);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_jump_to_start() {
    let mut game = play(&[0, 1]);

    game.jump_to(0);

    assert!(
        Position::ALL
            .iter()
            .all(|&pos| game.current_board().is_empty(pos))
    );
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status_line(), "Next player: X");
}

#[test]
fn test_jump_preserves_future_until_next_move() {
    let mut game = play(&[0, 1, 2]);

    game.jump_to(0);
    assert_eq!(game.snapshot_count(), 4);

    // The abandoned future is still reachable.
    game.jump_to(3);
    assert_eq!(game.current_step(), 3);
    assert_eq!(
        game.current_board().get(Position::TopRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_move_after_jump_truncates() {
    let mut game = play(&[0, 1, 2, 3]);

    game.jump_to(1);
    game.apply_move(5);

    assert_eq!(game.snapshot_count(), 3);
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.current_step(), 2);
    assert_eq!(
        game.current_board().get(Position::MiddleRight),
        Square::Occupied(Player::O)
    );
    assert_eq!(game.current_board().get(Position::TopRight), Square::Empty);
}

#[test]
fn test_jump_out_of_range_ignored() {
    let mut game = play(&[0]);

    game.jump_to(5);

    assert_eq!(game.current_step(), 1);
}

#[test]
fn test_jump_allowed_after_game_ends() {
    let mut game = play(&[0, 3, 1, 4, 2]);

    game.jump_to(2);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.current_player(), Player::X);

    // Back to the final snapshot: the win is still on record.
    game.jump_to(5);
    assert_eq!(game.outcome().winner(), Some(Player::X));
}

#[test]
fn test_branching_after_finished_game() {
    let mut game = play(&[0, 3, 1, 4, 2]);

    game.jump_to(4);
    game.apply_move(8);

    assert_eq!(game.snapshot_count(), 6);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(
        game.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_status_line_tracks_turn() {
    let mut game = GameHistory::new();
    assert_eq!(game.status_line(), "Next player: X");

    game.apply_move(4);
    assert_eq!(game.status_line(), "Next player: O");
}
