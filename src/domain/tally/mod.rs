//! Tally module - Vote results flowing up the holder hierarchy.
//!
//! - `VotedAnswer` / `AnswerKey` - One ballot line and its identity
//! - `VoteResult` - A tally, with its compact text form
//! - `VoteResultStatus` - Validation outcome
//! - `NodeVoteReceipt` - Signed record of a processed tally message

mod errors;
mod receipt;
mod status;
mod vote_result;
mod voted_answer;

pub use errors::TallyError;
pub use receipt::NodeVoteReceipt;
pub use status::VoteResultStatus;
pub use vote_result::VoteResult;
pub use voted_answer::{AnswerKey, VotedAnswer};
