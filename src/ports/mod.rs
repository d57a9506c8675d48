//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VoteSerializer` - Encode/decode votings and tallies for the wire
//! - `MessageBundler` - Join/split composite messages
//! - `ReceiptSigner` - Sign node vote receipts

mod message_bundler;
mod receipt_signer;
mod vote_serializer;

pub use message_bundler::MessageBundler;
pub use receipt_signer::ReceiptSigner;
pub use vote_serializer::{CodecError, VoteSerializer};
