//! Delete Script Use Case

use std::sync::Arc;

use auth::models::user_id::UserId;

use crate::domain::repository::ScriptRepository;
use crate::domain::value_object::script_id::ScriptId;
use crate::error::{ScriptError, ScriptResult};

/// Delete script use case
pub struct DeleteScriptUseCase<S>
where
    S: ScriptRepository,
{
    script_repo: Arc<S>,
}

impl<S> DeleteScriptUseCase<S>
where
    S: ScriptRepository,
{
    pub fn new(script_repo: Arc<S>) -> Self {
        Self { script_repo }
    }

    pub async fn execute(&self, script_id: &ScriptId, caller_id: &UserId) -> ScriptResult<()> {
        let script = self
            .script_repo
            .find_by_id(script_id)
            .await?
            .ok_or(ScriptError::NotFound)?;

        if !script.is_authored_by(caller_id) {
            return Err(ScriptError::AccessDenied);
        }

        self.script_repo.delete(script_id).await?;

        tracing::info!(script_id = %script_id, "Script deleted");

        Ok(())
    }
}
