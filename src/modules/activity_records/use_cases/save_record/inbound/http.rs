use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activity_records::core::record::{RecordSource, Tag};
use crate::modules::activity_records::use_cases::save_record::command::SaveRecord;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

fn manual() -> RecordSource {
    RecordSource::Manual
}

#[derive(Deserialize)]
pub struct SaveRecordBody {
    pub owner_id: String,
    #[serde(default)]
    pub content: String,
    /// Defaults to the time the request is received.
    pub start_time: Option<i64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default = "manual")]
    pub source: RecordSource,
    pub audio_path: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SaveRecordBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if !body.start_time.is_none_or(is_supported) {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    let now = Utc::now().timestamp_millis();
    let command = SaveRecord {
        owner_id: body.owner_id,
        content: body.content,
        start_time: body.start_time.unwrap_or(now),
        tags: body.tags,
        source: body.source,
        audio_path: body.audio_path,
        created_at: now,
    };

    match state.save_record_handler.handle(command).await {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
