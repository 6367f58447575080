use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::shared::core::application_error::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteRecordParams {
    pub owner_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    Query(params): Query<DeleteRecordParams>,
) -> impl IntoResponse {
    match state
        .delete_record_handler
        .handle(&record_id, &params.owner_id, Utc::now().timestamp_millis())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
