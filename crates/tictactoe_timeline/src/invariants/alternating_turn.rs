//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::history::GameHistory;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: Players alternate turns.
///
/// The mark added at snapshot 1 is X, at snapshot 2 is O, and so on.
/// Derived from snapshot diffs rather than a stored move list, so it
/// also covers histories restored from serialized state.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        for (step, pair) in history.snapshots().windows(2).enumerate() {
            let expected = if step % 2 == 0 { Player::X } else { Player::O };

            let added = Position::ALL.iter().find_map(|&pos| {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (Square::Empty, Square::Occupied(player)) => Some(player),
                    _ => None,
                }
            });

            if added != Some(expected) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
