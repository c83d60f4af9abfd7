//! Errors returned by the round state machine.
//!
//! Every error is local and recoverable: the rejected call leaves the state untouched.

use thiserror::Error;

use crate::types::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("item count {requested} is outside 1..={max}")]
    InvalidItemCount { requested: usize, max: usize },

    #[error("cannot swap positions {i} and {j} in a row of {len} items")]
    InvalidIndex { i: usize, j: usize, len: usize },

    #[error("cannot {operation} while the round is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("player and target rows must be the same length and hold the same colors")]
    InvalidArrangement,
}

impl GameError {
    /// Stable camelCase code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidItemCount { .. } => "invalidItemCount",
            GameError::InvalidIndex { .. } => "invalidIndex",
            GameError::InvalidPhase { .. } => "invalidPhase",
            GameError::InvalidArrangement => "invalidArrangement",
        }
    }
}
