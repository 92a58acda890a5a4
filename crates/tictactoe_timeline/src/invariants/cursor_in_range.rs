//! Cursor range invariant: the cursor always selects a stored snapshot.

use super::Invariant;
use crate::history::GameHistory;

/// Invariant: The cursor stays within the snapshot log.
///
/// The log always holds at least the empty starting snapshot, and the
/// current step indexes into it.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        !history.snapshots().is_empty() && history.current_step() < history.snapshot_count()
    }

    fn description() -> &'static str {
        "Cursor stays within the snapshot log"
    }
}
