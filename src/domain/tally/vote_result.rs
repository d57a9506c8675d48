//! VoteResult - a holder's or participant's tally for one voting.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{AnswerKey, TallyError, VoteResultStatus, VotedAnswer};

/// A tally: packet size plus vote amounts per ballot line.
///
/// Lines are kept ordered by [`AnswerKey`] so the compact text form is
/// deterministic. Adding a line whose key already exists sums the amounts.
///
/// Compact text form: `votingId,holderId,packetSize[,questionId:answerId:amount]*`,
/// or `votingId,` for an unattributed empty placeholder.
///
/// Equality ignores `status` and compares amounts numerically.
#[derive(Debug, Clone)]
pub struct VoteResult {
    voting_id: String,
    holder_id: Option<String>,
    packet_size: Decimal,
    status: VoteResultStatus,
    answers: BTreeMap<AnswerKey, VotedAnswer>,
}

impl VoteResult {
    /// Creates an empty tally.
    pub fn new(voting_id: impl Into<String>, holder_id: Option<String>, packet_size: Decimal) -> Self {
        Self {
            voting_id: voting_id.into(),
            holder_id,
            packet_size,
            status: VoteResultStatus::Ok,
            answers: BTreeMap::new(),
        }
    }

    /// Creates the unattributed placeholder tally for a voting.
    pub fn placeholder(voting_id: impl Into<String>) -> Self {
        Self::new(voting_id, None, Decimal::ZERO)
    }

    /// Adds a line, summing with an existing line of the same key.
    pub fn with_answer(mut self, answer: VotedAnswer) -> Result<Self, TallyError> {
        self.add_answer(answer)?;
        Ok(self)
    }

    pub(crate) fn add_answer(&mut self, answer: VotedAnswer) -> Result<(), TallyError> {
        let line = match self.answers.get(answer.key()) {
            Some(existing) => existing.plus(&answer)?,
            None => answer,
        };
        self.put_answer(line);
        Ok(())
    }

    /// Inserts a line, replacing any line with the same key.
    pub(crate) fn put_answer(&mut self, answer: VotedAnswer) {
        self.answers.insert(answer.key().clone(), answer);
    }

    pub(crate) fn set_packet_size(&mut self, packet_size: Decimal) {
        self.packet_size = packet_size;
    }

    pub fn voting_id(&self) -> &str {
        &self.voting_id
    }

    pub fn holder_id(&self) -> Option<&str> {
        self.holder_id.as_deref()
    }

    pub fn packet_size(&self) -> Decimal {
        self.packet_size
    }

    pub fn status(&self) -> VoteResultStatus {
        self.status
    }

    pub fn set_status(&mut self, status: VoteResultStatus) {
        self.status = status;
    }

    /// Lines in key order.
    pub fn answers(&self) -> impl Iterator<Item = &VotedAnswer> {
        self.answers.values()
    }

    pub fn answer(&self, key: &AnswerKey) -> Option<&VotedAnswer> {
        self.answers.get(key)
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// True for the `votingId,` short form: no holder, no packet, no lines.
    pub fn is_placeholder(&self) -> bool {
        self.holder_id.is_none() && self.packet_size.is_zero() && self.answers.is_empty()
    }
}

impl PartialEq for VoteResult {
    fn eq(&self, other: &Self) -> bool {
        self.voting_id == other.voting_id
            && self.holder_id == other.holder_id
            && self.packet_size == other.packet_size
            && self.answers.len() == other.answers.len()
            && self.answers.iter().all(|(key, answer)| {
                other
                    .answers
                    .get(key)
                    .is_some_and(|o| o.vote_amount() == answer.vote_amount())
            })
    }
}

impl Eq for VoteResult {}

impl fmt::Display for VoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            return write!(f, "{},", self.voting_id);
        }
        write!(
            f,
            "{},{},{}",
            self.voting_id,
            self.holder_id.as_deref().unwrap_or_default(),
            self.packet_size
        )?;
        for answer in self.answers.values() {
            write!(f, ",{}", answer)?;
        }
        Ok(())
    }
}

impl FromStr for VoteResult {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let terms: Vec<&str> = s.split(',').collect();
        if let [voting_id, ""] = terms.as_slice() {
            if voting_id.is_empty() {
                return Err(TallyError::parse(s, "empty voting id"));
            }
            return Ok(VoteResult::placeholder(*voting_id));
        }
        if terms.len() < 3 {
            return Err(TallyError::parse(
                s,
                format!("expected at least 3 terms, got {}", terms.len()),
            ));
        }
        let voting_id = terms[0];
        if voting_id.is_empty() {
            return Err(TallyError::parse(s, "empty voting id"));
        }
        let holder_id = match terms[1] {
            "" => None,
            holder => Some(holder.to_string()),
        };
        let packet_size = Decimal::from_str_exact(terms[2])
            .map_err(|e| TallyError::parse(s, format!("invalid packet size '{}': {}", terms[2], e)))?;

        let mut result = VoteResult::new(voting_id, holder_id, packet_size);
        for term in &terms[3..] {
            let answer = term.parse::<VotedAnswer>().map_err(|e| match e {
                TallyError::Parse { reason, .. } => {
                    TallyError::parse(s, format!("answer '{}': {}", term, reason))
                }
                other => other,
            })?;
            result.add_answer(answer)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> VoteResult {
        VoteResult::new("1", Some("holder-7".to_string()), dec!(100))
            .with_answer(VotedAnswer::new("1.1", "2", dec!(40)))
            .unwrap()
            .with_answer(VotedAnswer::new("1.1", "1", dec!(60)))
            .unwrap()
    }

    #[test]
    fn renders_compact_text_in_key_order() {
        assert_eq!(sample().to_string(), "1,holder-7,100,1.1:1:60,1.1:2:40");
    }

    #[test]
    fn parses_compact_text() {
        let parsed: VoteResult = "1,holder-7,100,1.1:1:60,1.1:2:40".parse().unwrap();
        assert_eq!(parsed, sample());
        assert_eq!(parsed.status(), VoteResultStatus::Ok);
    }

    #[test]
    fn compact_text_roundtrips() {
        let original = sample();
        let parsed: VoteResult = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn parses_placeholder_short_form() {
        let parsed: VoteResult = "V,".parse().unwrap();
        assert_eq!(parsed.voting_id(), "V");
        assert_eq!(parsed.holder_id(), None);
        assert_eq!(parsed.packet_size(), Decimal::ZERO);
        assert_eq!(parsed.answer_count(), 0);
        assert!(parsed.is_placeholder());
        assert_eq!(parsed.to_string(), "V,");
    }

    #[test]
    fn empty_holder_field_parses_as_none() {
        let parsed: VoteResult = "V,,10,1.1:1:10".parse().unwrap();
        assert_eq!(parsed.holder_id(), None);
        assert_eq!(parsed.to_string(), "V,,10,1.1:1:10");
    }

    #[test]
    fn rejects_too_few_terms() {
        let err = "V".parse::<VoteResult>().unwrap_err();
        assert_eq!(err, TallyError::parse("V", "expected at least 3 terms, got 1"));
        assert!("V,h".parse::<VoteResult>().is_err());
        assert!(",".parse::<VoteResult>().is_err());
    }

    #[test]
    fn rejects_bad_packet_size_and_bad_answer() {
        assert!("V,h,abc".parse::<VoteResult>().is_err());
        let err = "V,h,10,1.1:1".parse::<VoteResult>().unwrap_err();
        match err {
            TallyError::Parse { input, reason } => {
                assert_eq!(input, "V,h,10,1.1:1");
                assert!(reason.contains("1.1:1"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_lines_are_summed_not_duplicated() {
        let parsed: VoteResult = "V,h,10,1.1:1:3,1.1:1:4".parse().unwrap();
        assert_eq!(parsed.answer_count(), 1);
        let key = AnswerKey::new("1.1", "1");
        assert_eq!(parsed.answer(&key).unwrap().vote_amount(), dec!(7));
    }

    #[test]
    fn equality_is_scale_insensitive_and_ignores_status() {
        let a: VoteResult = "V,h,10.0,1.1:1:5.00".parse().unwrap();
        let mut b: VoteResult = "V,h,10,1.1:1:5".parse().unwrap();
        b.set_status(VoteResultStatus::ValidationFailed);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_distinguishes_holders_and_lines() {
        let a: VoteResult = "V,h,10,1.1:1:5".parse().unwrap();
        let b: VoteResult = "V,,10,1.1:1:5".parse().unwrap();
        let c: VoteResult = "V,h,10,1.1:2:5".parse().unwrap();
        let d: VoteResult = "V,h,10,1.1:1:5,1.1:2:1".parse().unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn parse_rejects_inexact_amounts() {
        let line = "1,h,10,1:1:1.00000000000000000000000000001".parse::<VoteResult>();
        let packet = "1,h,10.00000000000000000000000000001".parse::<VoteResult>();

        assert!(matches!(line, Err(TallyError::Parse { .. })));
        assert!(matches!(packet, Err(TallyError::Parse { .. })));
    }
}
