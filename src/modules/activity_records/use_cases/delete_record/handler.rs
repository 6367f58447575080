use crate::modules::activity_records::core::ports::RecordStore;
use crate::modules::activity_records::core::record::RecordPatch;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::Timestamp;
use std::sync::Arc;

/// Soft-deletes a record. The document stays in storage flagged `is_deleted`.
pub struct DeleteRecordHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
}

impl<TRecordStore> DeleteRecordHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TRecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        record_id: &str,
        owner_id: &str,
        now: Timestamp,
    ) -> Result<(), ApplicationError> {
        self.store
            .get(record_id)
            .await?
            .filter(|record| record.owner_id == owner_id)
            .ok_or_else(|| ApplicationError::NotFound(record_id.to_string()))?;
        self.store
            .update(record_id, RecordPatch::soft_delete(now))
            .await?;
        tracing::info!(record_id, owner_id, "record deleted");
        Ok(())
    }
}
