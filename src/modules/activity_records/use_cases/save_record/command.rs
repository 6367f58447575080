use crate::modules::activity_records::core::record::{RecordSource, Tag};
use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecord {
    pub owner_id: String,
    pub content: String,
    pub start_time: Timestamp,
    pub tags: Vec<Tag>,
    pub source: RecordSource,
    pub audio_path: Option<String>,
    pub created_at: Timestamp,
}
