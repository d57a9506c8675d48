//! Tally Aggregator - combining tallies up the holder hierarchy.

use rust_decimal::Decimal;

use crate::domain::tally::{TallyError, VoteResult, VotedAnswer};

/// Tally combination functions.
pub struct TallyAggregator;

impl TallyAggregator {
    /// Combines two tallies into a new one.
    ///
    /// # Algorithm
    /// - Lines only in `other` are copied in
    /// - Lines in both become a new line carrying the sum of both amounts
    /// - Packet size is the sum of both packet sizes
    ///
    /// The result keeps `base`'s voting id, holder id and status.
    ///
    /// # Edge Cases
    /// - `other` is `None`: returns a copy of `base`
    /// - Different voting ids: `TallyError::VotingMismatch`
    /// - Amount beyond decimal range: `TallyError::AmountOverflow`
    ///
    /// Associative and commutative, so the order in which child tallies
    /// arrive never changes the outcome.
    pub fn combine(base: &VoteResult, other: Option<&VoteResult>) -> Result<VoteResult, TallyError> {
        let mut merged = base.clone();
        let Some(other) = other else {
            return Ok(merged);
        };
        let packet_size = base
            .packet_size()
            .checked_add(other.packet_size())
            .ok_or_else(|| TallyError::amount_overflow("packet size"))?;
        Self::merge_into(&mut merged, Some(other))?;
        merged.set_packet_size(packet_size);
        Ok(merged)
    }

    /// Folds [`combine`](Self::combine) over any number of tallies.
    pub fn combine_all<'a, I>(base: &VoteResult, others: I) -> Result<VoteResult, TallyError>
    where
        I: IntoIterator<Item = &'a VoteResult>,
    {
        others
            .into_iter()
            .try_fold(base.clone(), |acc, other| Self::combine(&acc, Some(other)))
    }

    /// Merges `other`'s lines into `target` in place.
    ///
    /// Shared lines are replaced by a new summed line, never mutated.
    /// `target`'s packet size is left unchanged: this is the accumulation a
    /// holder uses when its own packet size is already fixed.
    ///
    /// On error `target` is left untouched.
    pub fn merge_into(target: &mut VoteResult, other: Option<&VoteResult>) -> Result<(), TallyError> {
        let Some(other) = other else {
            return Ok(());
        };
        if target.voting_id() != other.voting_id() {
            return Err(TallyError::voting_mismatch(target.voting_id(), other.voting_id()));
        }

        let lines = other
            .answers()
            .map(|answer| match target.answer(answer.key()) {
                Some(existing) => existing.plus(answer),
                None => Ok(answer.clone()),
            })
            .collect::<Result<Vec<VotedAnswer>, TallyError>>()?;

        for line in lines {
            target.put_answer(line);
        }
        Ok(())
    }

    /// Sums the amounts cast on all answers of one question.
    ///
    /// Returns zero when the tally has no line for the question. Saturates
    /// at the decimal range instead of overflowing.
    pub fn sum_for_question(tally: &VoteResult, question_id: &str) -> Decimal {
        tally
            .answers()
            .filter(|a| a.question_id() == question_id)
            .fold(Decimal::ZERO, |sum, a| sum.saturating_add(a.vote_amount()))
    }

    /// Like [`sum_for_question`](Self::sum_for_question), but `None` when
    /// the sum leaves the decimal range.
    pub fn checked_sum_for_question(tally: &VoteResult, question_id: &str) -> Option<Decimal> {
        tally
            .answers()
            .filter(|a| a.question_id() == question_id)
            .try_fold(Decimal::ZERO, |sum, a| sum.checked_add(a.vote_amount()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tally::AnswerKey;
    use rust_decimal_macros::dec;

    fn tally(packet: Decimal, lines: &[(&str, &str, Decimal)]) -> VoteResult {
        lines.iter().fold(
            VoteResult::new("1", Some("h".to_string()), packet),
            |acc, (q, a, amount)| acc.with_answer(VotedAnswer::new(*q, *a, *amount)).unwrap(),
        )
    }

    fn amount(t: &VoteResult, q: &str, a: &str) -> Option<Decimal> {
        t.answer(&AnswerKey::new(q, a)).map(|l| l.vote_amount())
    }

    #[test]
    fn combine_sums_shared_lines_and_packets() {
        let a = tally(dec!(100), &[("1.1", "1", dec!(60)), ("1.1", "2", dec!(40))]);
        let b = tally(dec!(50), &[("1.1", "1", dec!(50))]);

        let merged = TallyAggregator::combine(&a, Some(&b)).unwrap();

        assert_eq!(merged.packet_size(), dec!(150));
        assert_eq!(amount(&merged, "1.1", "1"), Some(dec!(110)));
        assert_eq!(amount(&merged, "1.1", "2"), Some(dec!(40)));
    }

    #[test]
    fn combine_inserts_lines_missing_from_base() {
        let a = tally(dec!(10), &[("1.1", "1", dec!(10))]);
        let b = tally(dec!(5), &[("1.2", "3", dec!(5))]);

        let merged = TallyAggregator::combine(&a, Some(&b)).unwrap();

        assert_eq!(merged.answer_count(), 2);
        assert_eq!(amount(&merged, "1.2", "3"), Some(dec!(5)));
    }

    #[test]
    fn combine_leaves_inputs_untouched() {
        let a = tally(dec!(10), &[("1.1", "1", dec!(10))]);
        let b = tally(dec!(5), &[("1.1", "1", dec!(5))]);

        let _ = TallyAggregator::combine(&a, Some(&b)).unwrap();

        assert_eq!(amount(&a, "1.1", "1"), Some(dec!(10)));
        assert_eq!(a.packet_size(), dec!(10));
    }

    #[test]
    fn combine_with_none_is_noop() {
        let a = tally(dec!(10), &[("1.1", "1", dec!(10))]);
        assert_eq!(TallyAggregator::combine(&a, None).unwrap(), a);
    }

    #[test]
    fn combine_is_commutative_for_same_holder() {
        let a = tally(dec!(10), &[("1.1", "1", dec!(3)), ("1.1", "2", dec!(7))]);
        let b = tally(dec!(20.5), &[("1.1", "1", dec!(0.5)), ("1.2", "1", dec!(20))]);
        assert_eq!(
            TallyAggregator::combine(&a, Some(&b)).unwrap(),
            TallyAggregator::combine(&b, Some(&a)).unwrap()
        );
    }

    #[test]
    fn combine_rejects_other_voting() {
        let a = tally(dec!(10), &[]);
        let b = VoteResult::new("2", Some("h".to_string()), dec!(10));
        let err = TallyAggregator::combine(&a, Some(&b)).unwrap_err();
        assert_eq!(err, TallyError::voting_mismatch("1", "2"));
    }

    #[test]
    fn combine_all_folds_every_child() {
        let own = tally(dec!(10), &[("1.1", "1", dec!(10))]);
        let children = vec![
            tally(dec!(5), &[("1.1", "1", dec!(5))]),
            tally(dec!(7), &[("1.1", "2", dec!(7))]),
        ];
        let merged = TallyAggregator::combine_all(&own, &children).unwrap();
        assert_eq!(merged.packet_size(), dec!(22));
        assert_eq!(amount(&merged, "1.1", "1"), Some(dec!(15)));
        assert_eq!(amount(&merged, "1.1", "2"), Some(dec!(7)));
    }

    #[test]
    fn merge_into_keeps_target_packet_size() {
        let mut target = tally(dec!(100), &[("1.1", "1", dec!(10))]);
        let other = tally(dec!(30), &[("1.1", "1", dec!(20)), ("1.1", "3", dec!(10))]);

        TallyAggregator::merge_into(&mut target, Some(&other)).unwrap();

        assert_eq!(target.packet_size(), dec!(100));
        assert_eq!(amount(&target, "1.1", "1"), Some(dec!(30)));
        assert_eq!(amount(&target, "1.1", "3"), Some(dec!(10)));
    }

    #[test]
    fn merge_into_with_none_is_noop() {
        let mut target = tally(dec!(100), &[("1.1", "1", dec!(10))]);
        let before = target.clone();
        TallyAggregator::merge_into(&mut target, None).unwrap();
        assert_eq!(target, before);
    }

    #[test]
    fn merge_into_is_all_or_nothing_on_overflow() {
        let mut target = tally(dec!(1), &[("1.1", "1", dec!(1)), ("1.1", "2", Decimal::MAX)]);
        let other = tally(dec!(1), &[("1.1", "1", dec!(1)), ("1.1", "2", Decimal::MAX)]);
        let before = target.clone();

        let err = TallyAggregator::merge_into(&mut target, Some(&other)).unwrap_err();

        assert!(matches!(err, TallyError::AmountOverflow { .. }));
        assert_eq!(target, before);
    }

    #[test]
    fn sum_for_question_adds_only_that_question() {
        let t = tally(
            dec!(100),
            &[("1.1", "1", dec!(60)), ("1.1", "2", dec!(15.5)), ("1.2", "1", dec!(99))],
        );
        assert_eq!(TallyAggregator::sum_for_question(&t, "1.1"), dec!(75.5));
        assert_eq!(TallyAggregator::sum_for_question(&t, "1.2"), dec!(99));
    }

    #[test]
    fn sum_for_question_is_zero_without_lines() {
        let t = tally(dec!(100), &[("1.1", "1", dec!(60))]);
        assert_eq!(TallyAggregator::sum_for_question(&t, "9.9"), Decimal::ZERO);
    }

    #[test]
    fn checked_sum_reports_overflow_where_plain_sum_saturates() {
        let t = tally(Decimal::MAX, &[("1", "1", Decimal::MAX), ("1", "2", dec!(1))]);

        assert_eq!(TallyAggregator::sum_for_question(&t, "1"), Decimal::MAX);
        assert_eq!(TallyAggregator::checked_sum_for_question(&t, "1"), None);
        assert_eq!(TallyAggregator::checked_sum_for_question(&t, "2"), Some(Decimal::ZERO));
    }
}
