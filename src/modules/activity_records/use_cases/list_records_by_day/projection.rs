use crate::modules::activity_records::core::record::{ActivityRecord, RecordSource, Tag};
use crate::shared::core::primitives::Timestamp;
use serde::Serialize;

/// Read model for a day's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub record_id: String,
    pub content: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    /// `None` while the record is open.
    pub duration_ms: Option<i64>,
    pub tags: Vec<Tag>,
    pub source: RecordSource,
    pub audio_path: Option<String>,
}

impl From<ActivityRecord> for RecordView {
    fn from(record: ActivityRecord) -> Self {
        Self {
            duration_ms: record.end_time.map(|end| end.saturating_sub(record.start_time)),
            record_id: record.record_id,
            content: record.content,
            start_time: record.start_time,
            end_time: record.end_time,
            tags: record.tags,
            source: record.source,
            audio_path: record.audio_path,
        }
    }
}
