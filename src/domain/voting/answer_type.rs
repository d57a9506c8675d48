//! AnswerType enum mapping single-select answers to wire vote instructions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed answer set of a single-select (non-cumulative) question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerType {
    For,
    Against,
    Abstain,
}

impl AnswerType {
    /// All answer types in canonical order.
    pub const ALL: [AnswerType; 3] = [AnswerType::For, AnswerType::Against, AnswerType::Abstain];

    /// Internal answer id used in votings and tallies.
    pub fn code(&self) -> &'static str {
        match self {
            AnswerType::For => "1",
            AnswerType::Against => "2",
            AnswerType::Abstain => "3",
        }
    }

    /// ISO 20022 `VoteInstruction2Code` for this answer.
    pub fn wire_code(&self) -> &'static str {
        match self {
            AnswerType::For => "CFOR",
            AnswerType::Against => "CAGS",
            AnswerType::Abstain => "ABST",
        }
    }

    /// Display label used when an answer is reconstructed from the wire.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerType::For => "For",
            AnswerType::Against => "Against",
            AnswerType::Abstain => "Abstain",
        }
    }

    /// Looks up the answer type for an internal answer id.
    ///
    /// Returns `None` for candidate ids of cumulative questions and for
    /// opaque codes.
    pub fn from_answer_id(answer_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == answer_id)
    }

    /// Looks up the answer type for a wire vote-instruction code.
    pub fn from_wire_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.wire_code() == code)
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_ids_map_to_types() {
        assert_eq!(AnswerType::from_answer_id("1"), Some(AnswerType::For));
        assert_eq!(AnswerType::from_answer_id("2"), Some(AnswerType::Against));
        assert_eq!(AnswerType::from_answer_id("3"), Some(AnswerType::Abstain));
    }

    #[test]
    fn unknown_answer_id_has_no_type() {
        assert_eq!(AnswerType::from_answer_id("2.1.1"), None);
        assert_eq!(AnswerType::from_answer_id(""), None);
    }

    #[test]
    fn wire_codes_map_to_types() {
        assert_eq!(AnswerType::from_wire_code("CFOR"), Some(AnswerType::For));
        assert_eq!(AnswerType::from_wire_code("CAGS"), Some(AnswerType::Against));
        assert_eq!(AnswerType::from_wire_code("ABST"), Some(AnswerType::Abstain));
        assert_eq!(AnswerType::from_wire_code("WTHH"), None);
    }

    #[test]
    fn codes_are_consistent_in_both_directions() {
        for t in AnswerType::ALL {
            assert_eq!(AnswerType::from_answer_id(t.code()), Some(t));
            assert_eq!(AnswerType::from_wire_code(t.wire_code()), Some(t));
        }
    }

    #[test]
    fn answer_type_serializes_to_screaming_case() {
        let json = serde_json::to_string(&AnswerType::Abstain).unwrap();
        assert_eq!(json, "\"ABSTAIN\"");
    }
}
