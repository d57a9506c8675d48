//! Signing adapters - `ReceiptSigner` implementations.

mod placeholder_signer;

pub use placeholder_signer::{PlaceholderSigner, PLACEHOLDER_SIGNATURE};
