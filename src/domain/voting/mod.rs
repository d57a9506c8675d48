//! Voting module - Ballot definitions shared across the holder hierarchy.
//!
//! - `Voting` - One ballot: questions, time window, security
//! - `Question` / `Answer` - Single-select and cumulative questions
//! - `AnswerType` - FOR/AGAINST/ABSTAIN and their wire codes
//! - `MeetingType` - ISO 20022 meeting type code carried in the voting name

mod answer_type;
mod meeting_type;
#[allow(clippy::module_inception)]
mod voting;

pub use answer_type::AnswerType;
pub use meeting_type::MeetingType;
pub use voting::{Answer, Question, Voting};
