//! Receipt Signer Port - Signing node vote receipts.
//!
//! Key management and the signature scheme live outside this crate; the
//! domain only needs an opaque signature string per receipt.

use crate::domain::foundation::DomainError;

/// Port for signing receipt payloads.
///
/// Implementations receive the canonical payload built by
/// `NodeVoteReceipt::signing_payload` and return an opaque signature.
pub trait ReceiptSigner: Send + Sync {
    /// Sign a receipt payload.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` with `ErrorCode::SigningFailed` when the signer
    /// cannot produce a signature.
    fn sign(&self, payload: &str) -> Result<String, DomainError>;
}
