//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::script::Script;
use crate::domain::value_object::script_id::ScriptId;
use crate::error::ScriptResult;

/// Script repository trait
#[trait_variant::make(ScriptRepository: Send)]
pub trait LocalScriptRepository {
    /// Create a new script
    async fn create(&self, script: &Script) -> ScriptResult<()>;

    /// Find script by ID
    async fn find_by_id(&self, script_id: &ScriptId) -> ScriptResult<Option<Script>>;

    /// Update title and text
    async fn update(&self, script: &Script) -> ScriptResult<()>;

    /// Delete a script
    async fn delete(&self, script_id: &ScriptId) -> ScriptResult<()>;
}
