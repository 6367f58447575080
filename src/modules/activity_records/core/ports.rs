// Ports define what the records module needs from storage, without implementing it.
//
// Purpose
// - Describe the records collection as a trait: query by owner and time range, get,
//   partial update, insert, and a guarded insert for engine-generated filler records.
//
// Boundaries
// - Soft-deleted records are invisible to every read. RecordQuery::matches carries
//   that predicate so adapters do not repeat it per call.

use crate::modules::activity_records::core::record::{
    ActivityRecord, NewRecord, RecordPatch, RecordSource,
};
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("record {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub owner_id: String,
    /// Inclusive lower bound on start_time.
    pub start_from: Option<Timestamp>,
    /// Exclusive upper bound on start_time.
    pub start_before: Option<Timestamp>,
    pub source: Option<RecordSource>,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

impl RecordQuery {
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            start_from: None,
            start_before: None,
            source: None,
            order: SortOrder::OldestFirst,
            limit: None,
        }
    }

    pub fn starting_within(mut self, from: Timestamp, before: Timestamp) -> Self {
        self.start_from = Some(from);
        self.start_before = Some(before);
        self
    }

    pub fn starting_at(self, at: Timestamp) -> Self {
        self.starting_within(at, at.saturating_add(1))
    }

    pub fn with_source(mut self, source: RecordSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.order = SortOrder::NewestFirst;
        self
    }

    pub fn oldest_first(mut self) -> Self {
        self.order = SortOrder::OldestFirst;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        !record.is_deleted
            && record.owner_id == self.owner_id
            && self.start_from.is_none_or(|from| record.start_time >= from)
            && self
                .start_before
                .is_none_or(|before| record.start_time < before)
            && self.source.is_none_or(|source| record.source == source)
    }

    /// Filter, order and limit an in-memory candidate set.
    pub fn select<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a ActivityRecord>,
    ) -> Vec<ActivityRecord> {
        let mut selected: Vec<ActivityRecord> = candidates
            .into_iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        selected.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        if self.order == SortOrder::NewestFirst {
            selected.reverse();
        }
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        selected
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn query(&self, query: &RecordQuery) -> Result<Vec<ActivityRecord>, RecordStoreError>;

    /// Soft-deleted records resolve to `None`.
    async fn get(&self, record_id: &str) -> Result<Option<ActivityRecord>, RecordStoreError>;

    async fn update(&self, record_id: &str, patch: RecordPatch) -> Result<(), RecordStoreError>;

    /// Returns the assigned record id.
    async fn insert(&self, record: NewRecord) -> Result<String, RecordStoreError>;

    /// Inserts only when nothing matches `guard`, as one step.
    /// Returns `None` when a matching record already exists.
    async fn insert_unless_exists(
        &self,
        guard: &RecordQuery,
        record: NewRecord,
    ) -> Result<Option<String>, RecordStoreError>;

    /// Owners with at least one live record.
    async fn owners(&self) -> Result<Vec<String>, RecordStoreError>;
}
