//! Monotonic history invariant: snapshots grow by one mark at a time.

use super::Invariant;
use crate::history::GameHistory;
use crate::position::Position;
use crate::types::{Board, Square};

/// Invariant: Each snapshot extends its predecessor by exactly one mark.
///
/// Snapshot 0 is the empty board. Between consecutive snapshots exactly
/// one square transitions from Empty to Occupied; no occupied square
/// ever changes or clears.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameHistory> for MonotonicHistoryInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();

        match snapshots.first() {
            Some(first) if *first == Board::new() => {}
            _ => return false,
        }

        for pair in snapshots.windows(2) {
            let mut placed = 0;
            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (before, after) if before == after => {}
                    (Square::Empty, Square::Occupied(_)) => placed += 1,
                    _ => return false,
                }
            }
            if placed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each snapshot extends its predecessor by exactly one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameHistory::new();
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = GameHistory::new();
        for index in [0, 4, 2, 6] {
            game.apply_move(index);
        }
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameHistory::new();
        game.apply_move(4);

        // Corrupt: the occupied center changes owner between snapshots.
        game.snapshots[1].set(Position::Center, Square::Occupied(Player::O));
        game.snapshots.push(game.snapshots[1].clone());
        game.snapshots[2].set(Position::Center, Square::Occupied(Player::X));

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_skipped_step_violates() {
        let mut game = GameHistory::new();
        game.apply_move(0);

        // Corrupt: two marks appear in a single step.
        let mut double = game.snapshots[1].clone();
        double.set(Position::Center, Square::Occupied(Player::O));
        double.set(Position::TopRight, Square::Occupied(Player::X));
        game.snapshots.push(double);

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_nonempty_start_violates() {
        let mut start = Board::new();
        start.set(Position::Center, Square::Occupied(Player::X));
        let game = GameHistory {
            snapshots: vec![start],
            current: 0,
        };

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
