// Shared builder for activity records used across unit and e2e tests.
// All timestamps fall in March 2024, UTC.

use crate::modules::activity_records::core::record::{
    ActivityRecord, NewRecord, RecordSource, Tag,
};
use crate::shared::core::primitives::Timestamp;
use chrono::{NaiveDate, TimeZone, Utc};

pub fn at(day: u32, hour: u32, minute: u32) -> Timestamp {
    let naive = NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap();
    Utc.from_utc_datetime(&naive).timestamp_millis()
}

pub struct ActivityRecordBuilder {
    inner: ActivityRecord,
}

#[allow(dead_code)]
impl ActivityRecordBuilder {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            inner: ActivityRecord {
                record_id: record_id.into(),
                owner_id: "owner-0001".to_string(),
                content: "写代码".to_string(),
                start_time: at(1, 9, 0),
                end_time: None,
                tags: vec![Tag::new("Work", "💼", "#FF5733")],
                source: RecordSource::Manual,
                audio_path: None,
                is_deleted: false,
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_000,
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

    pub fn end_time(mut self, v: Timestamp) -> Self {
        self.inner.end_time = Some(v);
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

    pub fn deleted(mut self) -> Self {
        self.inner.is_deleted = true;
        self
    }

    pub fn build(self) -> ActivityRecord {
        self.inner
    }

    pub fn build_new(self) -> NewRecord {
        NewRecord {
            owner_id: self.inner.owner_id,
            content: self.inner.content,
            start_time: self.inner.start_time,
            end_time: self.inner.end_time,
            tags: self.inner.tags,
            source: self.inner.source,
            audio_path: self.inner.audio_path,
            created_at: self.inner.created_at,
        }
    }
}

#[cfg(test)]
mod activity_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_a_live_open_manual_record() {
        let record = ActivityRecordBuilder::new("r-1").build();
        assert_eq!(record.owner_id, "owner-0001");
        assert!(record.is_open());
        assert!(!record.is_deleted);
        assert_eq!(record.source, RecordSource::Manual);
    }

    #[rstest]
    fn it_should_place_at_on_the_utc_clock() {
        assert_eq!(at(2, 0, 0) - at(1, 0, 0), 86_400_000);
        assert_eq!(at(1, 8, 0), 1_709_280_000_000);
    }
}
