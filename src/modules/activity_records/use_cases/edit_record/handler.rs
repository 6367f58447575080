use crate::modules::activity_records::core::ports::RecordStore;
use crate::modules::activity_records::core::record::{ActivityRecord, RecordPatch};
use crate::modules::activity_records::use_cases::edit_record::command::EditRecord;
use crate::modules::activity_records::use_cases::save_record::decide::dedup_tags;
use crate::shared::core::application_error::ApplicationError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditRejection {
    #[error("record content must not be empty")]
    EmptyContent,

    #[error("end time must be after start time")]
    EndBeforeStart,
}

pub struct EditRecordHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
}

impl<TRecordStore> EditRecordHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TRecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: EditRecord) -> Result<ActivityRecord, ApplicationError> {
        let current = self
            .store
            .get(&command.record_id)
            .await?
            .filter(|record| record.owner_id == command.owner_id)
            .ok_or_else(|| ApplicationError::NotFound(command.record_id.clone()))?;

        let content = match command.content {
            Some(content) if content.trim().is_empty() => {
                return Err(ApplicationError::Domain(EditRejection::EmptyContent.to_string()));
            }
            Some(content) => Some(content.trim().to_string()),
            None => None,
        };
        let start_time = command.start_time.unwrap_or(current.start_time);
        let end_time = command.end_time.unwrap_or(current.end_time);
        if end_time.is_some_and(|end| end <= start_time) {
            return Err(ApplicationError::Domain(EditRejection::EndBeforeStart.to_string()));
        }

        let patch = RecordPatch {
            content,
            start_time: command.start_time,
            end_time: command.end_time,
            tags: command.tags.map(dedup_tags),
            is_deleted: None,
            updated_at: command.updated_at,
        };
        self.store.update(&command.record_id, patch).await?;
        self.store
            .get(&command.record_id)
            .await?
            .ok_or(ApplicationError::NotFound(command.record_id))
    }
}
