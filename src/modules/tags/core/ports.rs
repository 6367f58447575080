use crate::modules::tags::core::tag::TagDefinition;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TagStore: Send + Sync {
    /// Soft-deleted tags resolve to `None`.
    async fn get(&self, tag_id: &str) -> Result<Option<TagDefinition>, TagStoreError>;

    /// Inserts or replaces by tag id.
    async fn save(&self, tag: TagDefinition) -> Result<(), TagStoreError>;

    /// Live tags of `owner_id`, newest first.
    async fn list(&self, owner_id: &str) -> Result<Vec<TagDefinition>, TagStoreError>;
}
