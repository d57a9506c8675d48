//! Tally Validator - business rules a tally must satisfy against its voting.

use rust_decimal::Decimal;
use thiserror::Error;

use super::TallyAggregator;
use crate::domain::tally::{AnswerKey, VoteResult};
use crate::domain::voting::Voting;

/// The first business rule a tally breaks.
///
/// Displays the diagnostic recorded alongside a rejected tally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyViolation {
    #[error("Result has nonpositive packet size {packet_size}")]
    NonPositivePacketSize { packet_size: Decimal },

    #[error("Answer {key} has nonpositive amount {amount}")]
    NonPositiveAmount { key: AnswerKey, amount: Decimal },

    #[error("Answer {key} has unknown question {}", .key.question_id())]
    UnknownQuestion { key: AnswerKey },

    #[error("Answer {key} has unknown answer {}", .key.answer_id())]
    UnknownAnswer { key: AnswerKey },

    #[error("Question {question_id} sum amount {sum} is more than packet size {packet_size}")]
    Oversubscribed {
        question_id: String,
        sum: Decimal,
        packet_size: Decimal,
    },

    #[error("Question {question_id} sum amount exceeds the decimal range and packet size {packet_size}")]
    SumOverflow {
        question_id: String,
        packet_size: Decimal,
    },
}

/// Tally validation functions.
pub struct TallyValidator;

impl TallyValidator {
    /// Returns the first violated rule, or `None` for a valid tally.
    ///
    /// Rules are checked one at a time, in this order, so diagnostics are
    /// deterministic:
    /// 1. packet size must be positive
    /// 2. every amount must be positive
    /// 3. every line must name a question of the voting
    /// 4. every line must name an answer of its question
    /// 5. no question may receive more than the packet size; a sum beyond
    ///    the decimal range counts as more
    ///
    /// Lines are scanned in key order, questions in voting order. Read-only:
    /// validating the same tally twice gives the same answer.
    pub fn validate(tally: &VoteResult, voting: &Voting) -> Option<TallyViolation> {
        let packet_size = tally.packet_size();
        if packet_size <= Decimal::ZERO {
            return Some(TallyViolation::NonPositivePacketSize { packet_size });
        }

        if let Some(line) = tally.answers().find(|a| a.vote_amount() <= Decimal::ZERO) {
            return Some(TallyViolation::NonPositiveAmount {
                key: line.key().clone(),
                amount: line.vote_amount(),
            });
        }

        if let Some(line) = tally.answers().find(|a| voting.question(a.question_id()).is_none()) {
            return Some(TallyViolation::UnknownQuestion {
                key: line.key().clone(),
            });
        }

        if let Some(line) = tally.answers().find(|a| {
            voting
                .question(a.question_id())
                .is_some_and(|q| q.answer(a.answer_id()).is_none())
        }) {
            return Some(TallyViolation::UnknownAnswer {
                key: line.key().clone(),
            });
        }

        voting.questions().iter().find_map(|question| {
            match TallyAggregator::checked_sum_for_question(tally, question.id()) {
                Some(sum) => (sum > packet_size).then(|| TallyViolation::Oversubscribed {
                    question_id: question.id().to_string(),
                    sum,
                    packet_size,
                }),
                None => Some(TallyViolation::SumOverflow {
                    question_id: question.id().to_string(),
                    packet_size,
                }),
            }
        })
    }

    /// True when [`validate`](Self::validate) finds nothing.
    pub fn is_valid(tally: &VoteResult, voting: &Voting) -> bool {
        Self::validate(tally, voting).is_none()
    }
}
