//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and
//! postconditions, formalizing the Hoare-style reasoning:
//! {P} action {Q}

use crate::history::{GameHistory, MoveError};
use crate::invariants::{
    AlternatingTurnInvariant, CursorInRangeInvariant, HistoryInvariants, Invariant, InvariantSet,
    MonotonicHistoryInvariant,
};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state
/// transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying the
///   action
/// - Postcondition: {Q(before, after)} - must hold after applying the
///   action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move at a cell index.
///
/// Preconditions:
/// - Game at the current snapshot is still in progress
/// - Index names a board position
/// - The square there is empty
///
/// Postconditions:
/// - The log grew to exactly one snapshot past the prior cursor
/// - The cursor advanced by one
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    fn pre(history: &GameHistory, index: &usize) -> Result<(), MoveError> {
        history.validate(*index).map(|_| ())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        if after.snapshot_count() != before.current_step() + 2 {
            return Err(MoveError::InvariantViolation(format!(
                "Snapshot log holds {} entries, expected {}",
                after.snapshot_count(),
                before.current_step() + 2
            )));
        }

        if after.current_step() != before.current_step() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Cursor at step {}, expected {}",
                after.current_step(),
                before.current_step() + 1
            )));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all history invariants hold (panics on violation in
/// debug builds).
pub fn assert_invariants(history: &GameHistory) {
    debug_assert!(
        MonotonicHistoryInvariant::holds(history),
        "{}",
        MonotonicHistoryInvariant::description()
    );
    debug_assert!(
        AlternatingTurnInvariant::holds(history),
        "{}",
        AlternatingTurnInvariant::description()
    );
    debug_assert!(
        CursorInRangeInvariant::holds(history),
        "{}",
        CursorInRangeInvariant::description()
    );
}
