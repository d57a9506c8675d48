//! Mapping between ballot questions and notification resolutions.
//!
//! # Layout
//!
//! A single-select question becomes one resolution titled `resolution`
//! whose `VoteInstrTp` list holds the wire codes of its answers.
//!
//! A cumulative question has no resolution of its own: each candidate
//! answer becomes a resolution titled `candidate`. On decode, a run of
//! consecutive candidates is folded back into one cumulative question
//! identified as `{preceding resolution id}.multi`, or
//! `{first candidate id}.multi` when the run opens the agenda.

use std::collections::HashSet;

use super::documents::Resolution;
use crate::domain::voting::{Answer, AnswerType, Question};

pub const CANDIDATE_TITLE: &str = "candidate";
pub const RESOLUTION_TITLE: &str = "resolution";

const CUMULATIVE_SUFFIX: &str = ".multi";
const DECODED_MAX_MULTIPLICITY: u32 = 1;

/// Flattens questions into the agenda, in question order.
pub(super) fn questions_to_resolutions(questions: &[Question]) -> Vec<Resolution> {
    let mut resolutions = Vec::new();
    for question in questions {
        if question.can_select_multiple() {
            resolutions.extend(question.answers().iter().map(|answer| Resolution {
                issuer_label: answer.id.clone(),
                title: Some(CANDIDATE_TITLE.to_string()),
                description: non_empty(&answer.name),
                for_information_only: false,
                vote_instruction_types: vec![AnswerType::For.wire_code().to_string()],
            }));
        } else {
            let codes = question
                .answers()
                .iter()
                .filter_map(|answer| AnswerType::from_answer_id(&answer.id))
                .map(|answer_type| answer_type.wire_code().to_string())
                .collect();
            resolutions.push(Resolution {
                issuer_label: question.id().to_string(),
                title: Some(RESOLUTION_TITLE.to_string()),
                description: non_empty(question.text()),
                for_information_only: false,
                vote_instruction_types: codes,
            });
        }
    }
    resolutions
}

/// Rebuilds questions from the agenda.
///
/// Resolutions without any recognized answer code carry nothing to vote on
/// and are dropped.
pub(super) fn resolutions_to_questions(resolutions: &[Resolution]) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut last_resolution: Option<&Resolution> = None;
    let mut run: Option<CandidateRun> = None;

    for resolution in resolutions {
        if is_candidate(resolution) {
            let run = run.get_or_insert_with(|| CandidateRun::opened_after(last_resolution, resolution));
            run.answers.push(Answer::new(
                resolution.issuer_label.clone(),
                resolution.description.clone().unwrap_or_default(),
            ));
            continue;
        }

        if let Some(finished) = run.take() {
            questions.push(finished.into_question());
        }
        last_resolution = Some(resolution);

        let mut seen = HashSet::new();
        let answers: Vec<Answer> = resolution
            .vote_instruction_types
            .iter()
            .filter_map(|code| AnswerType::from_wire_code(code))
            .filter(|answer_type| seen.insert(*answer_type))
            .map(|answer_type| Answer::new(answer_type.code(), answer_type.label()))
            .collect();
        if !answers.is_empty() {
            questions.push(Question::single(
                resolution.issuer_label.clone(),
                resolution.description.clone().unwrap_or_default(),
                answers,
            ));
        }
    }

    if let Some(finished) = run {
        questions.push(finished.into_question());
    }
    questions
}

fn is_candidate(resolution: &Resolution) -> bool {
    resolution.title.as_deref() == Some(CANDIDATE_TITLE)
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

struct CandidateRun {
    id: String,
    text: String,
    answers: Vec<Answer>,
}

impl CandidateRun {
    fn opened_after(previous: Option<&Resolution>, first_candidate: &Resolution) -> Self {
        let (id, text) = match previous {
            Some(resolution) => (
                format!("{}{}", resolution.issuer_label, CUMULATIVE_SUFFIX),
                resolution.description.clone().unwrap_or_default(),
            ),
            None => (
                format!("{}{}", first_candidate.issuer_label, CUMULATIVE_SUFFIX),
                String::new(),
            ),
        };
        Self {
            id,
            text,
            answers: Vec::new(),
        }
    }

    fn into_question(self) -> Question {
        Question::cumulative(self.id, self.text, self.answers, DECODED_MAX_MULTIPLICITY)
    }
}
