//! Script Text Value Object
//!
//! The script body. May be empty; only bounded in size.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum text size in bytes (64 KiB)
pub const SCRIPT_TEXT_MAX_BYTES: usize = 64 * 1024;

/// Script text value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptText(String);

impl ScriptText {
    /// Create new text with validation
    pub fn new(text: impl Into<String>) -> AppResult<Self> {
        let text = text.into();

        if text.len() > SCRIPT_TEXT_MAX_BYTES {
            return Err(AppError::bad_request(format!(
                "Text must be at most {} bytes",
                SCRIPT_TEXT_MAX_BYTES
            )));
        }

        Ok(Self(text))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text() {
        assert!(ScriptText::new("print('hello')").is_ok());
        assert!(ScriptText::new("").is_ok()); // empty body is allowed
    }

    #[test]
    fn test_too_large_text() {
        let text = "a".repeat(SCRIPT_TEXT_MAX_BYTES + 1);
        assert!(ScriptText::new(text).is_err());
    }

    #[test]
    fn test_at_the_limit() {
        let text = "a".repeat(SCRIPT_TEXT_MAX_BYTES);
        assert!(ScriptText::new(text).is_ok());
    }
}
