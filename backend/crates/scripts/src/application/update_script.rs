//! Update Script Use Case

use std::sync::Arc;

use auth::models::user_id::UserId;

use crate::application::ScriptView;
use crate::domain::repository::ScriptRepository;
use crate::domain::value_object::{
    script_id::ScriptId, script_text::ScriptText, script_title::ScriptTitle,
};
use crate::error::{ScriptError, ScriptResult};

/// Update script input
pub struct UpdateScriptInput {
    pub title: String,
    pub text: String,
}

/// Update script use case
pub struct UpdateScriptUseCase<S>
where
    S: ScriptRepository,
{
    script_repo: Arc<S>,
}

impl<S> UpdateScriptUseCase<S>
where
    S: ScriptRepository,
{
    pub fn new(script_repo: Arc<S>) -> Self {
        Self { script_repo }
    }

    pub async fn execute(
        &self,
        script_id: &ScriptId,
        input: UpdateScriptInput,
        editor_id: &UserId,
    ) -> ScriptResult<ScriptView> {
        let title = ScriptTitle::new(input.title)
            .map_err(|e| ScriptError::Validation(e.message().to_string()))?;
        let text = ScriptText::new(input.text)
            .map_err(|e| ScriptError::Validation(e.message().to_string()))?;

        let mut script = self
            .script_repo
            .find_by_id(script_id)
            .await?
            .ok_or(ScriptError::NotFound)?;

        if !script.is_authored_by(editor_id) {
            return Err(ScriptError::AccessDenied);
        }

        script.edit(title, text);
        self.script_repo.update(&script).await?;

        tracing::info!(script_id = %script.script_id, "Script updated");

        Ok(ScriptView::from(&script))
    }
}
