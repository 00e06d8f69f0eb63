//! PostgreSQL Repository Implementation

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::script::Script;
use crate::domain::repository::ScriptRepository;
use crate::domain::value_object::{
    script_id::ScriptId, script_text::ScriptText, script_title::ScriptTitle,
};
use crate::error::ScriptResult;

/// PostgreSQL-backed script repository
#[derive(Clone)]
pub struct PgScriptRepository {
    pool: PgPool,
}

impl PgScriptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ScriptRepository for PgScriptRepository {
    async fn create(&self, script: &Script) -> ScriptResult<()> {
        sqlx::query(
            r#"
            INSERT INTO scripts (
                script_id,
                author_id,
                title,
                text,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(script.script_id.as_uuid())
        .bind(script.author_id.as_uuid())
        .bind(script.title.as_str())
        .bind(script.text.as_str())
        .bind(script.created_at)
        .bind(script.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, script_id: &ScriptId) -> ScriptResult<Option<Script>> {
        let row = sqlx::query_as::<_, ScriptRow>(
            r#"
            SELECT
                script_id,
                author_id,
                title,
                text,
                created_at,
                updated_at
            FROM scripts
            WHERE script_id = $1
            "#,
        )
        .bind(script_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_script()))
    }

    async fn update(&self, script: &Script) -> ScriptResult<()> {
        sqlx::query(
            r#"
            UPDATE scripts SET
                title = $2,
                text = $3,
                updated_at = $4
            WHERE script_id = $1
            "#,
        )
        .bind(script.script_id.as_uuid())
        .bind(script.title.as_str())
        .bind(script.text.as_str())
        .bind(script.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, script_id: &ScriptId) -> ScriptResult<()> {
        sqlx::query("DELETE FROM scripts WHERE script_id = $1")
            .bind(script_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ScriptRow {
    script_id: Uuid,
    author_id: Uuid,
    title: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ScriptRow {
    fn into_script(self) -> Script {
        Script {
            script_id: ScriptId::from_uuid(self.script_id),
            author_id: UserId::from_uuid(self.author_id),
            title: ScriptTitle::from_db(self.title),
            text: ScriptText::from_db(self.text),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
