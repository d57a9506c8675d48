//! Re-keying tallies between the domain form and the instruction form.
//!
//! The instruction document has one slot per resolution, so a cumulative
//! question cannot be addressed directly. For the wire, each cumulative
//! line `(question, candidate)` becomes `(candidate, FOR)`; single-select
//! lines pass through. Reading the wire reverses this with a slot lookup
//! built from the voting.

use std::collections::HashMap;

use crate::domain::tally::{VoteResult, VotedAnswer};
use crate::domain::voting::{AnswerType, Question, Voting};
use crate::ports::CodecError;

/// Converts a domain tally to wire form.
///
/// # Errors
///
/// - `UnknownQuestion` when a line refers to a question the voting lacks
/// - `Tally` when two lines collapse onto one slot and overflow
pub fn adapt_for_wire(result: &VoteResult, voting: &Voting) -> Result<VoteResult, CodecError> {
    let mut adapted = rekeyed_shell(result);
    for line in result.answers() {
        let question = voting
            .question(line.question_id())
            .ok_or_else(|| CodecError::UnknownQuestion(line.to_string()))?;
        let wire_line = if question.can_select_multiple() {
            VotedAnswer::new(line.answer_id(), AnswerType::For.code(), line.vote_amount())
        } else {
            line.clone()
        };
        adapted.add_answer(wire_line)?;
    }
    Ok(adapted)
}

/// Converts a wire tally back to domain form.
///
/// # Errors
///
/// - `UnknownAnswer` when a line's slot matches neither a question nor a
///   candidate of the voting
/// - `Tally` when two wire lines collapse onto one key and overflow
pub fn adapt_from_wire(result: &VoteResult, voting: &Voting) -> Result<VoteResult, CodecError> {
    let slots = SlotLookup::new(voting);
    let mut adapted = rekeyed_shell(result);
    for line in result.answers() {
        let question = slots
            .resolve(line.question_id())
            .ok_or_else(|| CodecError::UnknownAnswer(line.to_string()))?;
        let domain_line = if question.can_select_multiple() {
            VotedAnswer::new(question.id(), line.question_id(), line.vote_amount())
        } else {
            line.clone()
        };
        adapted.add_answer(domain_line)?;
    }
    Ok(adapted)
}

fn rekeyed_shell(result: &VoteResult) -> VoteResult {
    let mut shell = VoteResult::new(
        result.voting_id(),
        result.holder_id().map(str::to_string),
        result.packet_size(),
    );
    shell.set_status(result.status());
    shell
}

/// Wire slot id to owning question. Question ids win over candidate ids.
struct SlotLookup<'a> {
    slots: HashMap<&'a str, &'a Question>,
}

impl<'a> SlotLookup<'a> {
    fn new(voting: &'a Voting) -> Self {
        let mut slots: HashMap<&'a str, &'a Question> = voting
            .questions()
            .iter()
            .map(|question| (question.id(), question))
            .collect();
        for question in voting.questions().iter().filter(|q| q.can_select_multiple()) {
            for answer in question.answers() {
                slots.entry(answer.id.as_str()).or_insert(question);
            }
        }
        Self { slots }
    }

    fn resolve(&self, slot: &str) -> Option<&'a Question> {
        self.slots.get(slot).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::tally::AnswerKey;
    use crate::domain::voting::Answer;
    use rust_decimal_macros::dec;

    fn voting() -> Voting {
        let standard = AnswerType::ALL
            .iter()
            .map(|t| Answer::new(t.code(), t.label()))
            .collect();
        let candidates = vec![Answer::new("A", "Alice"), Answer::new("B", "Bob"), Answer::new("C", "Carol")];
        Voting::new(
            "1",
            "GMET_Annual",
            Timestamp::from_millis(1_000).unwrap(),
            Timestamp::from_millis(2_000).unwrap(),
            "RU000A0JX0J2",
            vec![
                Question::single("1", "Approve report", standard),
                Question::cumulative("1.multi", "Board", candidates, 1),
            ],
        )
        .unwrap()
    }

    fn tally() -> VoteResult {
        VoteResult::new("1", Some("holder".to_string()), dec!(100))
            .with_answer(VotedAnswer::new("1", "1", dec!(60)))
            .unwrap()
            .with_answer(VotedAnswer::new("1.multi", "A", dec!(3)))
            .unwrap()
            .with_answer(VotedAnswer::new("1.multi", "B", dec!(2)))
            .unwrap()
    }

    #[test]
    fn cumulative_lines_move_to_candidate_slots() {
        let wire = adapt_for_wire(&tally(), &voting()).unwrap();

        assert_eq!(wire.answer(&AnswerKey::new("A", "1")).unwrap().vote_amount(), dec!(3));
        assert_eq!(wire.answer(&AnswerKey::new("B", "1")).unwrap().vote_amount(), dec!(2));
        assert_eq!(wire.answer(&AnswerKey::new("1", "1")).unwrap().vote_amount(), dec!(60));
        assert_eq!(wire.packet_size(), dec!(100));
        assert_eq!(wire.holder_id(), Some("holder"));
    }

    #[test]
    fn wire_form_reads_back_to_domain_form() {
        let voting = voting();
        let original = tally();

        let wire = adapt_for_wire(&original, &voting).unwrap();
        let restored = adapt_from_wire(&wire, &voting).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn unknown_question_fails_for_wire() {
        let tally = VoteResult::new("1", None, dec!(1))
            .with_answer(VotedAnswer::new("9", "1", dec!(1)))
            .unwrap();

        let err = adapt_for_wire(&tally, &voting()).unwrap_err();

        assert_eq!(err, CodecError::UnknownQuestion("9:1:1".to_string()));
    }

    #[test]
    fn unknown_slot_fails_from_wire() {
        let wire = VoteResult::new("1", None, dec!(1))
            .with_answer(VotedAnswer::new("Z", "1", dec!(1)))
            .unwrap();

        let err = adapt_from_wire(&wire, &voting()).unwrap_err();

        assert!(matches!(err, CodecError::UnknownAnswer(_)));
    }
}
