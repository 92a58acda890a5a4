//! Tic-tac-toe engine with time-travel move history.
//!
//! The engine is a pure, sequential state machine split in two:
//!
//! - **Rules**: pure evaluation of a board snapshot ([`evaluate`],
//!   [`check_winner`], [`is_full`])
//! - **History**: the snapshot log and cursor ([`GameHistory`]),
//!   enforcing move legality and enabling jumps to any past step
//!
//! Rendering, input dispatch, and styling are left to the embedding
//! host; the engine exposes the queries the host needs
//! ([`GameHistory::current_board`], [`GameHistory::status_line`],
//! [`GameHistory::step_label`]) and accepts cell and step indices in
//! return. Illegal requests are ignored rather than rejected loudly,
//! so a host can forward raw input events without pre-validation.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameHistory, Outcome, Player};
//!
//! let mut game = GameHistory::new();
//! game.apply_move(0); // X takes the top-left corner
//! game.apply_move(4); // O takes the center
//! assert_eq!(game.current_player(), Player::X);
//!
//! // Travel back to the start and branch off a new line of play.
//! game.jump_to(0);
//! game.apply_move(8);
//! assert_eq!(game.move_count(), 1);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod types;

// Crate-level exports - History controller
pub use history::{GameHistory, MoveError};

// Crate-level exports - Rules
pub use rules::{Line, Outcome, check_winner, evaluate, is_full};

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Invariants and contracts
pub use contracts::{Contract, MoveContract, assert_invariants};
pub use invariants::{
    AlternatingTurnInvariant, CursorInRangeInvariant, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant,
};
