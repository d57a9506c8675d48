//! VoteResultStatus enum - validation outcome of a processed tally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome recorded for a tally and for the receipt of its input message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteResultStatus {
    #[default]
    Ok,
    /// Parsed, but broke a business rule against its voting.
    ValidationFailed,
    /// Could not be parsed.
    Malformed,
    /// The receipt signer refused the tally.
    SignatureFailed,
}

impl VoteResultStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, VoteResultStatus::Ok)
    }
}

impl fmt::Display for VoteResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoteResultStatus::Ok => "OK",
            VoteResultStatus::ValidationFailed => "VALIDATION_FAILED",
            VoteResultStatus::Malformed => "MALFORMED",
            VoteResultStatus::SignatureFailed => "SIGNATURE_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ok() {
        assert_eq!(VoteResultStatus::default(), VoteResultStatus::Ok);
        assert!(VoteResultStatus::default().is_ok());
        assert!(!VoteResultStatus::Malformed.is_ok());
    }

    #[test]
    fn serializes_like_display() {
        for status in [
            VoteResultStatus::Ok,
            VoteResultStatus::ValidationFailed,
            VoteResultStatus::Malformed,
            VoteResultStatus::SignatureFailed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
