//! Create Script Use Case

use std::sync::Arc;

use auth::models::user_id::UserId;

use crate::application::ScriptView;
use crate::domain::entity::script::Script;
use crate::domain::repository::ScriptRepository;
use crate::domain::value_object::{script_text::ScriptText, script_title::ScriptTitle};
use crate::error::{ScriptError, ScriptResult};

/// Create script input
pub struct CreateScriptInput {
    pub title: String,
    pub text: String,
}

/// Create script use case
pub struct CreateScriptUseCase<S>
where
    S: ScriptRepository,
{
    script_repo: Arc<S>,
}

impl<S> CreateScriptUseCase<S>
where
    S: ScriptRepository,
{
    pub fn new(script_repo: Arc<S>) -> Self {
        Self { script_repo }
    }

    pub async fn execute(
        &self,
        input: CreateScriptInput,
        author_id: &UserId,
    ) -> ScriptResult<ScriptView> {
        let title = ScriptTitle::new(input.title)
            .map_err(|e| ScriptError::Validation(e.message().to_string()))?;
        let text = ScriptText::new(input.text)
            .map_err(|e| ScriptError::Validation(e.message().to_string()))?;

        let script = Script::new(*author_id, title, text);
        self.script_repo.create(&script).await?;

        tracing::info!(
            script_id = %script.script_id,
            author_id = %script.author_id,
            "Script created"
        );

        Ok(ScriptView::from(&script))
    }
}
