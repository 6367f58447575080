use crate::modules::templates::core::ports::{TemplateStore, TemplateStoreError};
use crate::modules::templates::core::template::NoteTemplate;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTemplateStore {
    templates: RwLock<HashMap<String, NoteTemplate>>,
    offline: bool,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Raw view including soft-deleted templates.
    pub async fn snapshot(&self) -> Vec<NoteTemplate> {
        self.templates.read().await.values().cloned().collect()
    }

    fn ensure_online(&self) -> Result<(), TemplateStoreError> {
        if self.offline {
            return Err(TemplateStoreError::Backend("Template store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn get(&self, template_id: &str) -> Result<Option<NoteTemplate>, TemplateStoreError> {
        self.ensure_online()?;
        Ok(self
            .templates
            .read()
            .await
            .get(template_id)
            .filter(|template| !template.is_deleted)
            .cloned())
    }

    async fn save(&self, template: NoteTemplate) -> Result<(), TemplateStoreError> {
        self.ensure_online()?;
        self.templates
            .write()
            .await
            .insert(template.template_id.clone(), template);
        Ok(())
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<NoteTemplate>, TemplateStoreError> {
        self.ensure_online()?;
        let guard = self.templates.read().await;
        let mut templates: Vec<NoteTemplate> = guard
            .values()
            .filter(|template| !template.is_deleted && template.owner_id == owner_id)
            .cloned()
            .collect();
        templates.sort_by_key(|template| (Reverse(template.created_at), template.template_id.clone()));
        Ok(templates)
    }
}
