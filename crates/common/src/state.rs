//! Common state machine error types
//!
//! Shared across all domain crates that implement screen state machines.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} in {from} state")]
    InvalidTransition { from: String, event: String },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),
}

impl StateError {
    pub fn invalid(from: impl ToString, event: impl ToString) -> Self {
        StateError::InvalidTransition {
            from: from.to_string(),
            event: event.to_string(),
        }
    }
}
