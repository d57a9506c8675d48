//! Message Bundler Port - Packing several encoded documents into one message.

use super::CodecError;

/// Port for joining and splitting composite messages.
///
/// # Contract
///
/// Whenever `build(parts)` succeeds, `split` of its output returns `parts`
/// unchanged. A part that would collide with the bundler's framing makes
/// `build` fail instead.
pub trait MessageBundler: Send + Sync {
    /// Join encoded documents into one message, in order.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Marshal` when a part contains the framing.
    fn build(&self, parts: &[&str]) -> Result<String, CodecError>;

    /// Split a message back into its documents, in order.
    fn split(&self, message: &str) -> Vec<String>;
}
