//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of invariants over the same
/// state type.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$name::holds(state) {
                        violations.push(InvariantViolation::new($name::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_turn;
pub mod cursor_in_range;
pub mod monotonic_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// All game history invariants as a composable set.
pub type HistoryInvariants = (
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
    CursorInRangeInvariant,
);
