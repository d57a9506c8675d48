//! Shareholder Tally - Vote aggregation across a nominal-holder hierarchy
//!
//! This crate combines and validates shareholder vote tallies as they move
//! up a chain of nominee holders, and encodes votings and tallies as
//! ISO 20022 meeting notification and instruction documents.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
