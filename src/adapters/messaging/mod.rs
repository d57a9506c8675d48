//! Messaging adapters - composite message framing.

mod delimited_bundler;

pub use delimited_bundler::{DelimitedMessageBundler, DEFAULT_MESSAGE_DELIMITER};
