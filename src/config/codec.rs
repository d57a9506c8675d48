//! Wire codec configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::messaging::DEFAULT_MESSAGE_DELIMITER;

/// Delimiter characters must be ASCII control characters that serde_json
/// always escapes and that pretty-printed XML never writes.
fn is_delimiter_char(c: char) -> bool {
    c.is_ascii_control() && !c.is_ascii_whitespace()
}

/// Wire codec configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Separator between the parts of a composite tally message
    #[serde(default = "default_message_delimiter")]
    pub message_delimiter: String,

    /// Indent XML documents
    #[serde(default)]
    pub pretty_print: bool,
}

impl CodecConfig {
    /// Validate codec configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message_delimiter.is_empty() {
            return Err(ValidationError::EmptyDelimiter);
        }
        if let Some(c) = self.message_delimiter.chars().find(|c| !is_delimiter_char(*c)) {
            return Err(ValidationError::InvalidDelimiterChar(c));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            message_delimiter: default_message_delimiter(),
            pretty_print: false,
        }
    }
}

fn default_message_delimiter() -> String {
    DEFAULT_MESSAGE_DELIMITER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_config_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.message_delimiter, "\u{1e}");
        assert!(!config.pretty_print);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_delimiter() {
        let config = CodecConfig {
            message_delimiter: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDelimiter));
    }

    #[test]
    fn test_validation_printable_delimiter() {
        for (delimiter, offending) in [("}{", '}'), ("|", '|'), ("\u{1e}x", 'x')] {
            let config = CodecConfig {
                message_delimiter: delimiter.to_string(),
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidDelimiterChar(offending))
            );
        }
    }

    #[test]
    fn test_validation_whitespace_delimiter() {
        let config = CodecConfig {
            message_delimiter: "\n".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDelimiterChar('\n')));
    }

    #[test]
    fn test_control_delimiter_accepted() {
        let config = CodecConfig {
            message_delimiter: "\u{1f}\u{1d}".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
