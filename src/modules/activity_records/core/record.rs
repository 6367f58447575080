// Activity record as stored in the records collection.
//
// Lifecycle
// - Created by a user save or by the stitching engine (source = auto).
// - Mutated only to set end_time, tags, content, start_time or the soft-delete flag.
// - Never hard-deleted; is_deleted hides it from every read.
//
// Timestamps
// - All i64 values are epoch milliseconds.

use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    Manual,
    Voice,
    Auto,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Manual => "manual",
            RecordSource::Voice => "voice",
            RecordSource::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub record_id: String,
    pub owner_id: String,
    pub content: String,
    pub start_time: Timestamp,
    /// `None` while the activity is still in progress.
    pub end_time: Option<Timestamp>,
    pub tags: Vec<Tag>,
    pub source: RecordSource,
    pub audio_path: Option<String>,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ActivityRecord {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Full document handed to the store on insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub owner_id: String,
    pub content: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub tags: Vec<Tag>,
    pub source: RecordSource,
    pub audio_path: Option<String>,
    pub created_at: Timestamp,
}

impl NewRecord {
    pub fn into_record(self, record_id: String) -> ActivityRecord {
        ActivityRecord {
            record_id,
            owner_id: self.owner_id,
            content: self.content,
            start_time: self.start_time,
            end_time: self.end_time,
            tags: self.tags,
            source: self.source,
            audio_path: self.audio_path,
            is_deleted: false,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordPatch {
    pub content: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Option<Timestamp>>,
    pub tags: Option<Vec<Tag>>,
    pub is_deleted: Option<bool>,
    pub updated_at: Timestamp,
}

impl RecordPatch {
    pub fn close_at(end_time: Timestamp, updated_at: Timestamp) -> Self {
        Self {
            end_time: Some(Some(end_time)),
            updated_at,
            ..Self::default()
        }
    }

    pub fn soft_delete(updated_at: Timestamp) -> Self {
        Self {
            is_deleted: Some(true),
            updated_at,
            ..Self::default()
        }
    }

    pub fn apply_to(self, record: &mut ActivityRecord) {
        if let Some(content) = self.content {
            record.content = content;
        }
        if let Some(start_time) = self.start_time {
            record.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            record.end_time = end_time;
        }
        if let Some(tags) = self.tags {
            record.tags = tags;
        }
        if let Some(is_deleted) = self.is_deleted {
            record.is_deleted = is_deleted;
        }
        record.updated_at = self.updated_at;
    }
}
