use crate::modules::activity_records::core::record::Tag;
use crate::shared::core::primitives::Timestamp;

/// Partial edit of a user's record. `None` keeps the stored value; `end_time: Some(None)`
/// reopens the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    pub record_id: String,
    pub owner_id: String,
    pub content: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Option<Timestamp>>,
    pub tags: Option<Vec<Tag>>,
    pub updated_at: Timestamp,
}

impl EditRecord {
    pub fn new(record_id: impl Into<String>, owner_id: impl Into<String>, updated_at: Timestamp) -> Self {
        Self {
            record_id: record_id.into(),
            owner_id: owner_id.into(),
            content: None,
            start_time: None,
            end_time: None,
            tags: None,
            updated_at,
        }
    }
}
