//! Snapshot history and time-travel for tic-tac-toe.
//!
//! [`GameHistory`] owns the ordered log of board snapshots produced by
//! successive moves, together with the cursor selecting the snapshot on
//! display. Snapshots are independent immutable values rather than
//! diffs, so jumping to any step is a cursor assignment, not a replay.

use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when validating a move request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index does not name a board position.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game at the current snapshot is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// The game history controller: snapshot log plus cursor.
///
/// Snapshot 0 is the empty starting board; snapshot `i` is the board
/// after exactly `i` moves. The cursor selects the snapshot on display
/// and determines the player to move next (X on even steps). A new
/// move taken while the cursor sits before the latest snapshot
/// discards the abandoned future before appending.
///
/// Illegal requests (out-of-range cell or step, occupied square, move
/// after the game ended) leave the state untouched. The stricter
/// [`GameHistory::validate`] query reports the rejection reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl GameHistory {
    /// Creates a fresh history: one empty snapshot, cursor at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl GameHistory {
    /// Validates a move request against the current snapshot.
    ///
    /// Returns the board position for a legal request. Does not mutate.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` if the current snapshot's outcome is decided,
    /// `OutOfBounds` if the index names no position, `SquareOccupied`
    /// if the square is taken.
    pub fn validate(&self, index: usize) -> Result<Position, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.current_board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        Ok(position)
    }

    /// Applies a move at the given cell index (0-8).
    ///
    /// The mark placed belongs to [`GameHistory::current_player`]. The
    /// snapshot log is truncated to the current step before the new
    /// snapshot is appended, discarding any future abandoned by an
    /// earlier [`GameHistory::jump_to`].
    ///
    /// Illegal requests are ignored: the state machine never rejects
    /// loudly and never crashes on bad input.
    #[instrument(skip(self), fields(player = ?self.current_player()))]
    pub fn apply_move(&mut self, index: usize) {
        let position = match self.validate(index) {
            Ok(position) => position,
            Err(rejected) => {
                debug!(index, %rejected, "move request ignored");
                return;
            }
        };

        let mark = self.current_player();
        let mut next = self.snapshots[self.current].clone();
        next.set(position, Square::Occupied(mark));

        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current += 1;

        crate::contracts::assert_invariants(self);
    }

    /// Moves the cursor to the given step.
    ///
    /// Jumping never truncates the log: after jumping backwards, every
    /// later step remains reachable until a new move overwrites it.
    /// Jumping is allowed even after the game has ended. Out-of-range
    /// steps are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.snapshots.len() {
            debug!(step, snapshots = self.snapshots.len(), "jump request ignored");
            return;
        }
        self.current = step;
    }
}

// ─────────────────────────────────────────────────────────────
//  Queries
// ─────────────────────────────────────────────────────────────

impl GameHistory {
    /// Returns the snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Returns the step the cursor points at.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Returns the player to move at the current snapshot.
    ///
    /// X moves on even steps, O on odd steps.
    pub fn current_player(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the outcome of the current snapshot.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }

    /// Returns the number of moves recorded (excludes the empty
    /// starting snapshot).
    pub fn move_count(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns the number of snapshots in the log.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns all snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }
}

// ─────────────────────────────────────────────────────────────
//  Presentation support
// ─────────────────────────────────────────────────────────────

impl GameHistory {
    /// Returns the status line for the current snapshot.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("Next player: {}", self.current_player()),
            Outcome::Won { winner, .. } => format!("Winner: {}", winner),
            Outcome::Draw => "Draw".to_string(),
        }
    }

    /// Returns the label for the time-travel control at the given step.
    pub fn step_label(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}
