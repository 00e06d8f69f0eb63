//! HTTP Handlers
//!
//! All routes run behind `auth::middleware::require_auth`, which places
//! [`CurrentUser`] into request extensions.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use auth::middleware::CurrentUser;

use crate::application::{
    CreateScriptInput, CreateScriptUseCase, DeleteScriptUseCase, ReadScriptUseCase, ScriptView,
    UpdateScriptInput, UpdateScriptUseCase,
};
use crate::domain::repository::ScriptRepository;
use crate::domain::value_object::script_id::ScriptId;
use crate::error::ScriptResult;
use crate::presentation::dto::{CreateScriptRequest, ScriptResponse, UpdateScriptRequest};

/// Shared state for script handlers
#[derive(Clone)]
pub struct ScriptAppState<S>
where
    S: ScriptRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<S>,
}

/// POST /v1/script/create
pub async fn create<S>(
    State(state): State<ScriptAppState<S>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<CreateScriptRequest>,
) -> ScriptResult<(StatusCode, Json<ScriptResponse>)>
where
    S: ScriptRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateScriptUseCase::new(state.repo.clone());

    let input = CreateScriptInput {
        title: req.title,
        text: req.text,
    };

    let view = use_case.execute(input, &current_user.user_id).await?;

    Ok((StatusCode::CREATED, Json(to_response(view))))
}

/// GET /v1/script/{id}
pub async fn read<S>(
    State(state): State<ScriptAppState<S>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(script_id): Path<Uuid>,
) -> ScriptResult<Json<ScriptResponse>>
where
    S: ScriptRepository + Clone + Send + Sync + 'static,
{
    let use_case = ReadScriptUseCase::new(state.repo.clone());

    let view = use_case
        .execute(&ScriptId::from_uuid(script_id), &current_user.user_id)
        .await?;

    Ok(Json(to_response(view)))
}

/// PUT /v1/script/{id}
pub async fn update<S>(
    State(state): State<ScriptAppState<S>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(script_id): Path<Uuid>,
    Json(req): Json<UpdateScriptRequest>,
) -> ScriptResult<Json<ScriptResponse>>
where
    S: ScriptRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateScriptUseCase::new(state.repo.clone());

    let input = UpdateScriptInput {
        title: req.title,
        text: req.text,
    };

    let view = use_case
        .execute(
            &ScriptId::from_uuid(script_id),
            input,
            &current_user.user_id,
        )
        .await?;

    Ok(Json(to_response(view)))
}

/// DELETE /v1/script/{id}
pub async fn delete<S>(
    State(state): State<ScriptAppState<S>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(script_id): Path<Uuid>,
) -> ScriptResult<StatusCode>
where
    S: ScriptRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteScriptUseCase::new(state.repo.clone());

    use_case
        .execute(&ScriptId::from_uuid(script_id), &current_user.user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_response(view: ScriptView) -> ScriptResponse {
    ScriptResponse {
        script_id: view.script_id,
        title: view.title,
        text: view.text,
        created_at: view.created_at,
        updated_at: view.updated_at,
    }
}
