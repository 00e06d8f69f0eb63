//! Application Layer
//!
//! Use cases, one per operation. Every use case takes the authenticated
//! caller and enforces ownership.

pub mod create_script;
pub mod delete_script;
pub mod read_script;
pub mod update_script;

use chrono::{DateTime, Utc};

use crate::domain::entity::script::Script;

// Re-exports
pub use create_script::{CreateScriptInput, CreateScriptUseCase};
pub use delete_script::DeleteScriptUseCase;
pub use read_script::ReadScriptUseCase;
pub use update_script::{UpdateScriptInput, UpdateScriptUseCase};

/// Script as returned by use cases
#[derive(Debug)]
pub struct ScriptView {
    pub script_id: String,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Script> for ScriptView {
    fn from(script: &Script) -> Self {
        Self {
            script_id: script.script_id.to_string(),
            title: script.title.to_string(),
            text: script.text.to_string(),
            created_at: script.created_at,
            updated_at: script.updated_at,
        }
    }
}
