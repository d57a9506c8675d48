//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `voting` - Ballot definition (voting, questions, answers, meeting type)
//! - `tally` - Vote results, ballot lines and node receipts
//! - `aggregation` - Pure domain services for combining and validating tallies

pub mod aggregation;
pub mod foundation;
pub mod tally;
pub mod voting;
