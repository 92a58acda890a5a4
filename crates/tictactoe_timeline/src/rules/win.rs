//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning lines, in evaluation order.
///
/// Rows first, then columns, then diagonals. On a malformed board with
/// more than one completed line, the first line in this order wins the
/// tie-break; in legal play at most one line completes at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Positions 0, 1, 2.
    TopRow,
    /// Positions 3, 4, 5.
    MiddleRow,
    /// Positions 6, 7, 8.
    BottomRow,
    /// Positions 0, 3, 6.
    LeftColumn,
    /// Positions 1, 4, 7.
    CenterColumn,
    /// Positions 2, 5, 8.
    RightColumn,
    /// Positions 0, 4, 8.
    MainDiagonal,
    /// Positions 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Returns the three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        match self {
            Line::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::MiddleRow => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::LeftColumn => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Line::CenterColumn => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the completed line, or `None`.
/// Lines are checked in [`Line`] declaration order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    for line in Line::iter() {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some((player, line)),
                Square::Empty => None,
            };
        }
    }

    None
}
