//! Delimiter-framed composite messages.

use crate::ports::{CodecError, MessageBundler};

/// ASCII record separator. Cannot appear in XML character data or JSON text
/// produced by this crate.
pub const DEFAULT_MESSAGE_DELIMITER: &str = "\u{1e}";

/// Joins parts with a fixed delimiter and splits on every occurrence of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedMessageBundler {
    delimiter: String,
}

impl DelimitedMessageBundler {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for DelimitedMessageBundler {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_DELIMITER)
    }
}

impl MessageBundler for DelimitedMessageBundler {
    fn build(&self, parts: &[&str]) -> Result<String, CodecError> {
        if let Some(index) = parts.iter().position(|part| part.contains(self.delimiter.as_str())) {
            return Err(CodecError::Marshal(format!(
                "message part {} contains the delimiter {:?}",
                index, self.delimiter
            )));
        }
        Ok(parts.join(&self.delimiter))
    }

    fn split(&self, message: &str) -> Vec<String> {
        message.split(self.delimiter.as_str()).map(str::to_string).collect()
    }
}
