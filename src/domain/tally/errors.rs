//! Tally-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while parsing or combining tallies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("Tally can not be created from '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Tally for voting '{actual}' can not be combined into tally for voting '{expected}'")]
    VotingMismatch { expected: String, actual: String },

    #[error("Vote amount overflow on {key}")]
    AmountOverflow { key: String },
}

impl TallyError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        TallyError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn voting_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        TallyError::VotingMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn amount_overflow(key: impl ToString) -> Self {
        TallyError::AmountOverflow { key: key.to_string() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TallyError::Parse { .. } => ErrorCode::TallyParseFailed,
            TallyError::VotingMismatch { .. } => ErrorCode::VotingMismatch,
            TallyError::AmountOverflow { .. } => ErrorCode::AmountOverflow,
        }
    }
}

impl From<TallyError> for DomainError {
    fn from(err: TallyError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
