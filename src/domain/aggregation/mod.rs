//! Aggregation Module - Pure domain services over tallies.
//!
//! - `TallyAggregator` - combine, merge and per-question sums
//! - `TallyValidator` - business rules a tally must satisfy against its voting
//!
//! All functions are pure and stateless; a holder can re-run them as child
//! tallies trickle in and always reach the same result.

mod aggregator;
mod validator;

pub use aggregator::TallyAggregator;
pub use validator::{TallyValidator, TallyViolation};
