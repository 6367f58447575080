use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activity_records::use_cases::auto_fill_sleep::command::{
    AutoFillSleep, Debounce,
};
use crate::modules::activity_records::use_cases::auto_fill_sleep::report::AutoFillReport;
use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AutoFillBody {
    pub owner_id: String,
    pub as_of: Option<i64>,
    /// Client-held time of its previous trigger; used with `min_interval_ms`.
    pub last_run_at: Option<i64>,
    pub min_interval_ms: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AutoFillBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if !body.as_of.is_none_or(is_supported) || !body.last_run_at.is_none_or(is_supported) {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    let debounce = match (body.last_run_at, body.min_interval_ms) {
        (Some(last_run_at), Some(min_interval_ms)) => Some(Debounce {
            last_run_at,
            min_interval_ms,
        }),
        _ => None,
    };
    let command = AutoFillSleep {
        owner_id: body.owner_id,
        as_of: body.as_of.unwrap_or_else(|| Utc::now().timestamp_millis()),
        debounce,
    };

    let report = AutoFillReport::from_result(&state.auto_fill_handler.handle(command).await);
    let status = if report.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(report)).into_response()
}
