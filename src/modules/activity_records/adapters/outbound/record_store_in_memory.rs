// In memory implementation of the RecordStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep records per id behind a single RwLock.
// - Run insert_unless_exists under one write guard so the existence check and the
//   insert cannot interleave with another writer.
// - Offer failure toggles to exercise the error paths of the callers.

use crate::modules::activity_records::core::ports::{RecordQuery, RecordStore, RecordStoreError};
use crate::modules::activity_records::core::record::{ActivityRecord, NewRecord, RecordPatch};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, ActivityRecord>>,
    offline: bool,
    failing_updates: bool,
    failing_inserts: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn toggle_failing_updates(&mut self) {
        self.failing_updates = !self.failing_updates;
    }

    pub fn toggle_failing_inserts(&mut self) {
        self.failing_inserts = !self.failing_inserts;
    }

    /// Seeds a fully formed record, deleted ones included.
    pub async fn seed(&self, record: ActivityRecord) {
        self.records
            .write()
            .await
            .insert(record.record_id.clone(), record);
    }

    /// Raw view including soft-deleted records.
    pub async fn snapshot(&self) -> Vec<ActivityRecord> {
        let mut all: Vec<ActivityRecord> = self.records.read().await.values().cloned().collect();
        all.sort_by_key(|record| (record.start_time, record.created_at));
        all
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }

    fn ensure_inserts(&self) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        if self.failing_inserts {
            return Err(RecordStoreError::Backend("Record insert rejected".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn query(&self, query: &RecordQuery) -> Result<Vec<ActivityRecord>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        Ok(query.select(guard.values()))
    }

    async fn get(&self, record_id: &str) -> Result<Option<ActivityRecord>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        Ok(guard
            .get(record_id)
            .filter(|record| !record.is_deleted)
            .cloned())
    }

    async fn update(&self, record_id: &str, patch: RecordPatch) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        if self.failing_updates {
            return Err(RecordStoreError::Backend("Record update rejected".into()));
        }
        let mut guard = self.records.write().await;
        let record = guard
            .get_mut(record_id)
            .filter(|record| !record.is_deleted)
            .ok_or_else(|| RecordStoreError::NotFound(record_id.to_string()))?;
        patch.apply_to(record);
        Ok(())
    }

    async fn insert(&self, record: NewRecord) -> Result<String, RecordStoreError> {
        self.ensure_inserts()?;
        let record_id = Uuid::now_v7().to_string();
        self.records
            .write()
            .await
            .insert(record_id.clone(), record.into_record(record_id.clone()));
        Ok(record_id)
    }

    async fn insert_unless_exists(
        &self,
        guard: &RecordQuery,
        record: NewRecord,
    ) -> Result<Option<String>, RecordStoreError> {
        self.ensure_inserts()?;
        let mut records = self.records.write().await;
        if records.values().any(|existing| guard.matches(existing)) {
            return Ok(None);
        }
        let record_id = Uuid::now_v7().to_string();
        records.insert(record_id.clone(), record.into_record(record_id.clone()));
        Ok(Some(record_id))
    }

    async fn owners(&self) -> Result<Vec<String>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        let owners: BTreeSet<String> = guard
            .values()
            .filter(|record| !record.is_deleted)
            .map(|record| record.owner_id.clone())
            .collect();
        Ok(owners.into_iter().collect())
    }
}
