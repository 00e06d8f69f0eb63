//! Script Entity

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    script_id::ScriptId, script_text::ScriptText, script_title::ScriptTitle,
};

/// Script entity, owned by the user who created it
#[derive(Debug, Clone)]
pub struct Script {
    pub script_id: ScriptId,
    pub author_id: UserId,
    pub title: ScriptTitle,
    pub text: ScriptText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Script {
    /// Create a new script
    pub fn new(author_id: UserId, title: ScriptTitle, text: ScriptText) -> Self {
        let now = Utc::now();

        Self {
            script_id: ScriptId::new(),
            author_id,
            title,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and text
    pub fn edit(&mut self, title: ScriptTitle, text: ScriptText) {
        self.title = title;
        self.text = text;
        self.updated_at = Utc::now();
    }

    /// Check ownership
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }
}
