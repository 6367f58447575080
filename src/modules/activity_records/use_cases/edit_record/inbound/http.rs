use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activity_records::core::record::Tag;
use crate::modules::activity_records::use_cases::edit_record::command::EditRecord;
use crate::modules::activity_records::use_cases::list_records_by_day::projection::RecordView;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditRecordBody {
    pub owner_id: String,
    pub content: Option<String>,
    pub start_time: Option<i64>,
    /// Absent keeps the stored end; `null` reopens the record.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub end_time: Option<Option<i64>>,
    pub tags: Option<Vec<Tag>>,
}

impl EditRecordBody {
    fn times_supported(&self) -> bool {
        self.start_time.is_none_or(is_supported) && self.end_time.flatten().is_none_or(is_supported)
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    body: Result<Json<EditRecordBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if !body.times_supported() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    let command = EditRecord {
        record_id,
        owner_id: body.owner_id,
        content: body.content,
        start_time: body.start_time,
        end_time: body.end_time,
        tags: body.tags,
        updated_at: Utc::now().timestamp_millis(),
    };

    match state.edit_record_handler.handle(command).await {
        Ok(record) => Json(RecordView::from(record)).into_response(),
        Err(ApplicationError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
