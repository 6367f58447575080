use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::templates::core::template::TemplateCategory;
use crate::modules::templates::use_cases::save_template::command::SaveTemplate;
use crate::shared::core::application_error::ApplicationError;
use crate::shell::state::AppState;

fn other() -> TemplateCategory {
    TemplateCategory::Other
}

#[derive(Deserialize)]
pub struct SaveTemplateBody {
    pub owner_id: String,
    pub name: String,
    #[serde(default = "other")]
    pub category: TemplateCategory,
    pub content: String,
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub owner_id: String,
}

#[derive(Deserialize)]
pub struct ListTemplatesParams {
    pub owner_id: String,
    /// Absent lists every category.
    pub category: Option<TemplateCategory>,
}

fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Domain(_) => StatusCode::CONFLICT.into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn save(state: AppState, template_id: Option<String>, body: SaveTemplateBody) -> Response {
    let created = template_id.is_none();
    let command = SaveTemplate {
        template_id,
        owner_id: body.owner_id,
        name: body.name,
        category: body.category,
        content: body.content,
        now: Utc::now().timestamp_millis(),
    };
    match state.save_template_handler.handle(command).await {
        Ok(template) if created => (StatusCode::CREATED, Json(template)).into_response(),
        Ok(template) => Json(template).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SaveTemplateBody>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(body)) => save(state, None, body).await,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    body: Result<Json<SaveTemplateBody>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(body)) => save(state, Some(template_id), body).await,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTemplatesParams>,
) -> impl IntoResponse {
    match state
        .list_templates_handler
        .handle(&params.owner_id, params.category)
        .await
    {
        Ok(templates) => Json(templates).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    Query(params): Query<OwnerParams>,
) -> impl IntoResponse {
    match state
        .delete_template_handler
        .handle(&template_id, &params.owner_id, Utc::now().timestamp_millis())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
