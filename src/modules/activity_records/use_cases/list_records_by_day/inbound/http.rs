use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListRecordsParams {
    pub owner_id: String,
    /// Any timestamp inside the wanted day; defaults to today.
    pub day: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListRecordsParams>,
) -> impl IntoResponse {
    let day = params.day.unwrap_or_else(|| Utc::now().timestamp_millis());
    if !is_supported(day) {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    match state.list_records_handler.handle(&params.owner_id, day).await {
        Ok(records) => Json(records).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
