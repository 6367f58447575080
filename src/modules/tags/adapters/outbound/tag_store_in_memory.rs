use crate::modules::tags::core::ports::{TagStore, TagStoreError};
use crate::modules::tags::core::tag::TagDefinition;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTagStore {
    tags: RwLock<HashMap<String, TagDefinition>>,
    offline: bool,
}

impl InMemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Raw view including soft-deleted tags.
    pub async fn snapshot(&self) -> Vec<TagDefinition> {
        self.tags.read().await.values().cloned().collect()
    }

    fn ensure_online(&self) -> Result<(), TagStoreError> {
        if self.offline {
            return Err(TagStoreError::Backend("Tag store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TagStore for InMemoryTagStore {
    async fn get(&self, tag_id: &str) -> Result<Option<TagDefinition>, TagStoreError> {
        self.ensure_online()?;
        Ok(self
            .tags
            .read()
            .await
            .get(tag_id)
            .filter(|tag| !tag.is_deleted)
            .cloned())
    }

    async fn save(&self, tag: TagDefinition) -> Result<(), TagStoreError> {
        self.ensure_online()?;
        self.tags.write().await.insert(tag.tag_id.clone(), tag);
        Ok(())
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<TagDefinition>, TagStoreError> {
        self.ensure_online()?;
        let guard = self.tags.read().await;
        let mut tags: Vec<TagDefinition> = guard
            .values()
            .filter(|tag| !tag.is_deleted && tag.owner_id == owner_id)
            .cloned()
            .collect();
        tags.sort_by_key(|tag| (Reverse(tag.created_at), tag.tag_id.clone()));
        Ok(tags)
    }
}
