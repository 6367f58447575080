use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::tags::use_cases::save_tag::command::SaveTag;
use crate::shared::core::application_error::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SaveTagBody {
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub owner_id: String,
}

fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Domain(_) => StatusCode::CONFLICT.into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn save(state: AppState, tag_id: Option<String>, body: SaveTagBody) -> Response {
    let created = tag_id.is_none();
    let command = SaveTag {
        tag_id,
        owner_id: body.owner_id,
        name: body.name,
        icon: body.icon,
        color: body.color,
        now: Utc::now().timestamp_millis(),
    };
    match state.save_tag_handler.handle(command).await {
        Ok(tag) if created => (StatusCode::CREATED, Json(tag)).into_response(),
        Ok(tag) => Json(tag).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<SaveTagBody>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(body)) => save(state, None, body).await,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    body: Result<Json<SaveTagBody>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(body)) => save(state, Some(tag_id), body).await,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OwnerParams>,
) -> impl IntoResponse {
    match state.list_tags_handler.handle(&params.owner_id).await {
        Ok(tags) => Json(tags).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    Query(params): Query<OwnerParams>,
) -> impl IntoResponse {
    match state
        .delete_tag_handler
        .handle(&tag_id, &params.owner_id, Utc::now().timestamp_millis())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
