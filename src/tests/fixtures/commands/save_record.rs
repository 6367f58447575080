// Shared test fixture for the SaveRecord command, seeded from JSON.

use crate::modules::activity_records::core::record::{RecordSource, Tag};
use crate::modules::activity_records::use_cases::save_record::command::SaveRecord;
use crate::shared::core::primitives::Timestamp;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRecordDto {
    pub owner_id: String,
    pub content: String,
    pub start_time: i64,
    pub tags: Vec<Tag>,
    pub source: RecordSource,
    pub audio_path: Option<String>,
}

pub struct SaveRecordBuilder {
    inner: SaveRecord,
}

impl Default for SaveRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SaveRecordBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/save_record.json").unwrap();
        let dto: SaveRecordDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SaveRecord {
                owner_id: dto.owner_id,
                content: dto.content,
                start_time: dto.start_time,
                tags: dto.tags,
                source: dto.source,
                audio_path: dto.audio_path,
                created_at: 1_800_000_000_000,
            },
        }
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn start_time(mut self, v: Timestamp) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn tags(mut self, v: Vec<Tag>) -> Self {
        self.inner.tags = v;
        self
    }

    pub fn source(mut self, v: RecordSource) -> Self {
        self.inner.source = v;
        self
    }

    pub fn audio_path(mut self, v: Option<String>) -> Self {
        self.inner.audio_path = v;
        self
    }

    pub fn created_at(mut self, v: Timestamp) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> SaveRecord {
        self.inner
    }
}

#[cfg(test)]
mod save_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SaveRecordBuilder::default().build();
        assert_eq!(built.owner_id, "owner-0001");
        assert_eq!(built.content, "写代码");
        assert_eq!(built.start_time, 1_709_280_000_000);
        assert_eq!(built.tags, vec![Tag::new("Work", "💼", "#FF5733")]);
        assert_eq!(built.source, RecordSource::Manual);
        assert_eq!(built.audio_path, None);
        assert_eq!(built.created_at, 1_800_000_000_000);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SaveRecordBuilder::new()
            .owner_id("owner-0002")
            .content("跑步")
            .start_time(1111)
            .tags(vec![])
            .source(RecordSource::Voice)
            .audio_path(Some("audio/1.m4a".into()))
            .created_at(2222)
            .build();

        assert_eq!(custom.owner_id, "owner-0002");
        assert_eq!(custom.content, "跑步");
        assert_eq!(custom.start_time, 1111);
        assert!(custom.tags.is_empty());
        assert_eq!(custom.source, RecordSource::Voice);
        assert_eq!(custom.audio_path.as_deref(), Some("audio/1.m4a"));
        assert_eq!(custom.created_at, 2222);
    }
}
