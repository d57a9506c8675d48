//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod tally;

pub use tally::{ProcessTalliesCommand, ProcessTalliesHandler, ProcessTalliesResult};
