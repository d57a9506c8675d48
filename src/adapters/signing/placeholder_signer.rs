//! Fixed-marker signer for nodes without key material.

use crate::domain::foundation::DomainError;
use crate::ports::ReceiptSigner;

pub const PLACEHOLDER_SIGNATURE: &str = "signature";

/// Signs every payload with the same marker string.
///
/// Receipts signed this way carry no cryptographic guarantee.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSigner;

impl PlaceholderSigner {
    pub fn new() -> Self {
        Self
    }
}

impl ReceiptSigner for PlaceholderSigner {
    fn sign(&self, _payload: &str) -> Result<String, DomainError> {
        Ok(PLACEHOLDER_SIGNATURE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_marker_for_any_payload() {
        let signer = PlaceholderSigner::new();

        assert_eq!(signer.sign("a").unwrap(), PLACEHOLDER_SIGNATURE);
        assert_eq!(signer.sign("").unwrap(), PLACEHOLDER_SIGNATURE);
    }
}
