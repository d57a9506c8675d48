//! Vote Serializer Port - Translating votings and tallies to wire messages.
//!
//! This port defines the contract between the domain and a message format.
//! Adapters (ISO 20022 XML, plain JSON) provide the implementation.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::tally::{TallyError, VoteResult};
use crate::domain::voting::Voting;

/// Port for encoding and decoding votings and tallies.
///
/// # Contract
///
/// The two encode directions deliberately differ:
/// - `serialize_voting` is lenient: any failure yields `None`, and callers
///   must check before using the output
/// - `serialize_result` is strict: failures are returned as `CodecError`
///
/// Decoding always fails loudly with a `CodecError` carrying the reason.
///
/// # Usage
///
/// ```rust,ignore
/// let serializer: &dyn VoteSerializer = get_serializer();
///
/// let Some(notification) = serializer.serialize_voting(&voting) else {
///     return Err(...);
/// };
/// let message = serializer.serialize_result(&tally, &voting)?;
/// let decoded = serializer.deserialize_result(&message)?;
/// ```
pub trait VoteSerializer: Send + Sync {
    /// Encode a voting; `None` when it cannot be represented.
    fn serialize_voting(&self, voting: &Voting) -> Option<String>;

    /// Decode a voting.
    fn deserialize_voting(&self, message: &str) -> Result<Voting, CodecError>;

    /// Encode a tally in the context of its voting.
    fn serialize_result(&self, result: &VoteResult, voting: &Voting) -> Result<String, CodecError>;

    /// Decode a tally produced by [`serialize_result`](Self::serialize_result).
    fn deserialize_result(&self, message: &str) -> Result<VoteResult, CodecError>;
}

/// Errors raised while encoding or decoding wire messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Couldn't deserialize message {payload}. Reason: {reason}")]
    Malformed { payload: String, reason: String },

    #[error("Wrong message string: expected {expected} parts, got {actual}")]
    WrongPartCount { expected: usize, actual: usize },

    #[error("Answer {0} refers to an unknown question")]
    UnknownQuestion(String),

    #[error("Unknown answer {0}.")]
    UnknownAnswer(String),

    #[error("vote answer {0} is unknown")]
    UnknownAnswerType(String),

    #[error("unable to serialize. Reason: {0}")]
    Marshal(String),

    #[error(transparent)]
    Tally(#[from] TallyError),
}

impl CodecError {
    pub fn malformed(payload: impl Into<String>, reason: impl ToString) -> Self {
        CodecError::Malformed {
            payload: payload.into(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CodecError::Malformed { .. } => ErrorCode::MalformedDocument,
            CodecError::WrongPartCount { .. } => ErrorCode::WrongPartCount,
            CodecError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            CodecError::UnknownAnswer(_) => ErrorCode::UnknownAnswer,
            CodecError::UnknownAnswerType(_) => ErrorCode::UnknownAnswerType,
            CodecError::Marshal(_) => ErrorCode::MarshalFailed,
            CodecError::Tally(err) => err.code(),
        }
    }
}

impl From<CodecError> for DomainError {
    fn from(err: CodecError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_carries_payload_and_reason() {
        let err = CodecError::malformed("<Document/>", "missing field `MtgNtfctn`");
        assert_eq!(
            err.to_string(),
            "Couldn't deserialize message <Document/>. Reason: missing field `MtgNtfctn`"
        );
        assert_eq!(err.code(), ErrorCode::MalformedDocument);
    }

    #[test]
    fn tally_errors_keep_their_code() {
        let err = CodecError::from(TallyError::amount_overflow("1.1-1"));
        assert_eq!(err.code(), ErrorCode::AmountOverflow);
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = CodecError::WrongPartCount { expected: 2, actual: 3 }.into();
        assert_eq!(err.code, ErrorCode::WrongPartCount);
        assert_eq!(err.message, "Wrong message string: expected 2 parts, got 3");
    }
}
