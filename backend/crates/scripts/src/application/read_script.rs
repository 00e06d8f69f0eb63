//! Read Script Use Case

use std::sync::Arc;

use auth::models::user_id::UserId;

use crate::application::ScriptView;
use crate::domain::repository::ScriptRepository;
use crate::domain::value_object::script_id::ScriptId;
use crate::error::{ScriptError, ScriptResult};

/// Read script use case
pub struct ReadScriptUseCase<S>
where
    S: ScriptRepository,
{
    script_repo: Arc<S>,
}

impl<S> ReadScriptUseCase<S>
where
    S: ScriptRepository,
{
    pub fn new(script_repo: Arc<S>) -> Self {
        Self { script_repo }
    }

    pub async fn execute(
        &self,
        script_id: &ScriptId,
        reader_id: &UserId,
    ) -> ScriptResult<ScriptView> {
        let script = self
            .script_repo
            .find_by_id(script_id)
            .await?
            .ok_or(ScriptError::NotFound)?;

        // Ownership applies to reads as well
        if !script.is_authored_by(reader_id) {
            return Err(ScriptError::AccessDenied);
        }

        Ok(ScriptView::from(&script))
    }
}
