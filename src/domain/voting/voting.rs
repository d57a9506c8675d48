//! Voting, Question and Answer - the ballot definition shared by every node.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Timestamp, ValidationError};

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub name: String,
}

impl Answer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A question on the ballot.
///
/// Single-select questions carry the FOR/AGAINST/ABSTAIN answer set (or
/// opaque codes). Cumulative questions carry candidate answers and let a
/// holder spread its packet across them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: String,
    text: String,
    answers: Vec<Answer>,
    can_select_multiple: bool,
    max_multiplicity: u32,
}

impl Question {
    /// Creates a single-select question.
    pub fn single(id: impl Into<String>, text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            answers,
            can_select_multiple: false,
            max_multiplicity: 1,
        }
    }

    /// Creates a cumulative (multi-select) question over candidate answers.
    pub fn cumulative(
        id: impl Into<String>,
        text: impl Into<String>,
        answers: Vec<Answer>,
        max_multiplicity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            answers,
            can_select_multiple: true,
            max_multiplicity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn can_select_multiple(&self) -> bool {
        self.can_select_multiple
    }

    pub fn max_multiplicity(&self) -> u32 {
        self.max_multiplicity
    }

    /// Returns the answer with the given id, if this question offers it.
    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        if self.can_select_multiple && self.max_multiplicity == 0 {
            return Err(ValidationError::out_of_range(
                "max_multiplicity",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        let mut seen = HashSet::new();
        for answer in &self.answers {
            if answer.id.is_empty() {
                return Err(ValidationError::empty_field("answer_id"));
            }
            if !seen.insert(answer.id.as_str()) {
                return Err(ValidationError::duplicate("answer_id", answer.id.clone()));
            }
        }
        Ok(())
    }
}

/// A ballot: one meeting's questions, time window and security.
///
/// Immutable once constructed. JSON deserialization goes through the same
/// checks as [`Voting::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "VotingRecord")]
pub struct Voting {
    id: String,
    name: String,
    begin_timestamp: Timestamp,
    end_timestamp: Timestamp,
    security: String,
    questions: Vec<Question>,
}

impl Voting {
    /// Creates a voting, validating its structure.
    ///
    /// # Errors
    ///
    /// - empty voting id
    /// - `begin_timestamp` not strictly before `end_timestamp`
    /// - empty or duplicate question ids, duplicate answer ids within a question
    /// - cumulative question with zero multiplicity
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        begin_timestamp: Timestamp,
        end_timestamp: Timestamp,
        security: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let voting = Self {
            id: id.into(),
            name: name.into(),
            begin_timestamp,
            end_timestamp,
            security: security.into(),
            questions,
        };
        voting.validate()?;
        Ok(voting)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::empty_field("voting_id"));
        }
        if !self.begin_timestamp.is_before(&self.end_timestamp) {
            return Err(ValidationError::invalid_format(
                "end_timestamp",
                format!(
                    "voting ends at {} which is not after its begin {}",
                    self.end_timestamp, self.begin_timestamp
                ),
            ));
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            question.validate()?;
            if !seen.insert(question.id.as_str()) {
                return Err(ValidationError::duplicate("question_id", question.id.clone()));
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn begin_timestamp(&self) -> Timestamp {
        self.begin_timestamp
    }

    pub fn end_timestamp(&self) -> Timestamp {
        self.end_timestamp
    }

    pub fn security(&self) -> &str {
        &self.security
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question with the given id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

/// Unchecked wire shape of a voting, validated into [`Voting`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VotingRecord {
    id: String,
    name: String,
    begin_timestamp: Timestamp,
    end_timestamp: Timestamp,
    security: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl TryFrom<VotingRecord> for Voting {
    type Error = ValidationError;

    fn try_from(record: VotingRecord) -> Result<Self, Self::Error> {
        Voting::new(
            record.id,
            record.name,
            record.begin_timestamp,
            record.end_timestamp,
            record.security,
            record.questions,
        )
    }
}
