use crate::modules::activity_records::core::ports::{RecordQuery, RecordStore};
use crate::modules::activity_records::core::record::ActivityRecord;
use crate::modules::tags::core::ports::TagStore;
use crate::modules::tags::core::tag::{DEFAULT_TAGS, TagSummary};
use crate::shared::core::application_error::ApplicationError;
use std::sync::Arc;

/// Built-in tags followed by the owner's custom tags (newest first), each with the
/// number of live records carrying its name.
pub struct ListTagsHandler<TTagStore, TRecordStore>
where
    TTagStore: TagStore + Send + Sync + 'static,
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    tags: Arc<TTagStore>,
    records: Arc<TRecordStore>,
}

impl<TTagStore, TRecordStore> ListTagsHandler<TTagStore, TRecordStore>
where
    TTagStore: TagStore + Send + Sync + 'static,
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(tags: Arc<TTagStore>, records: Arc<TRecordStore>) -> Self {
        Self { tags, records }
    }

    pub async fn handle(&self, owner_id: &str) -> Result<Vec<TagSummary>, ApplicationError> {
        let records = self.records.query(&RecordQuery::for_owner(owner_id)).await?;
        let defaults = DEFAULT_TAGS.iter().map(|(name, icon, color)| TagSummary {
            tag_id: None,
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            is_default: true,
            usage_count: count_usage(&records, name),
        });
        let custom = self.tags.list(owner_id).await?.into_iter().map(|tag| TagSummary {
            usage_count: count_usage(&records, &tag.name),
            tag_id: Some(tag.tag_id),
            name: tag.name,
            icon: tag.icon,
            color: tag.color,
            is_default: false,
        });
        Ok(defaults.chain(custom).collect())
    }
}

fn count_usage(records: &[ActivityRecord], name: &str) -> usize {
    records
        .iter()
        .filter(|record| record.tags.iter().any(|tag| tag.name == name))
        .count()
}
