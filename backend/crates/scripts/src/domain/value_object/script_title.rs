//! Script Title Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length (in characters, after trimming)
pub const SCRIPT_TITLE_MAX_LENGTH: usize = 128;

/// Script title value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTitle(String);

impl ScriptTitle {
    /// Create a new title with validation
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        let title = title.into().trim().to_string();

        if title.is_empty() {
            return Err(AppError::bad_request("Title cannot be empty"));
        }

        if title.chars().count() > SCRIPT_TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Title must be at most {} characters",
                SCRIPT_TITLE_MAX_LENGTH
            )));
        }

        Ok(Self(title))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
