//! VotedAnswer - one line item of a tally.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::TallyError;

/// Identity of a ballot line: question plus answer.
///
/// Two lines with the same key are the same ballot line and are summed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnswerKey {
    question_id: String,
    answer_id: String,
}

impl AnswerKey {
    pub fn new(question_id: impl Into<String>, answer_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer_id: answer_id.into(),
        }
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn answer_id(&self) -> &str {
        &self.answer_id
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.question_id, self.answer_id)
    }
}

/// An amount of votes cast for one answer of one question.
///
/// Compact text form: `questionId:answerId:amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotedAnswer {
    key: AnswerKey,
    vote_amount: Decimal,
}

impl VotedAnswer {
    pub fn new(question_id: impl Into<String>, answer_id: impl Into<String>, vote_amount: Decimal) -> Self {
        Self {
            key: AnswerKey::new(question_id, answer_id),
            vote_amount,
        }
    }

    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    pub fn question_id(&self) -> &str {
        self.key.question_id()
    }

    pub fn answer_id(&self) -> &str {
        self.key.answer_id()
    }

    pub fn vote_amount(&self) -> Decimal {
        self.vote_amount
    }

    /// Returns a new line for the same key carrying both amounts.
    pub fn plus(&self, other: &VotedAnswer) -> Result<VotedAnswer, TallyError> {
        let vote_amount = self
            .vote_amount
            .checked_add(other.vote_amount)
            .ok_or_else(|| TallyError::amount_overflow(&self.key))?;
        Ok(VotedAnswer {
            key: self.key.clone(),
            vote_amount,
        })
    }
}

impl fmt::Display for VotedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.key.question_id, self.key.answer_id, self.vote_amount
        )
    }
}

impl FromStr for VotedAnswer {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [question_id, answer_id, amount] = parts.as_slice() else {
            return Err(TallyError::parse(
                s,
                format!("answer must have 3 ':'-separated terms, got {}", parts.len()),
            ));
        };
        if question_id.is_empty() {
            return Err(TallyError::parse(s, "answer has empty question id"));
        }
        if answer_id.is_empty() {
            return Err(TallyError::parse(s, "answer has empty answer id"));
        }
        let vote_amount = Decimal::from_str_exact(amount)
            .map_err(|e| TallyError::parse(s, format!("invalid vote amount '{}': {}", amount, e)))?;
        Ok(VotedAnswer::new(*question_id, *answer_id, vote_amount))
    }
}
