//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and from the history log so they compose into contracts.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check_winner};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { winner, .. } => write!(f, "Player {} wins", winner),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board snapshot.
///
/// Total over any well-formed board: a completed line wins, a full
/// board with no completed line is a draw, anything else is in
/// progress. No side effects, no mutation.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = check_winner(board) {
        Outcome::Won { winner, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
