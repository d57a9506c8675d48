//! Tally handlers.

mod process_tallies;

pub use process_tallies::{ProcessTalliesCommand, ProcessTalliesHandler, ProcessTalliesResult};
