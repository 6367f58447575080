use crate::modules::templates::core::template::NoteTemplate;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Soft-deleted templates resolve to `None`.
    async fn get(&self, template_id: &str) -> Result<Option<NoteTemplate>, TemplateStoreError>;

    /// Inserts or replaces by template id.
    async fn save(&self, template: NoteTemplate) -> Result<(), TemplateStoreError>;

    /// Live templates of `owner_id`, newest first.
    async fn list(&self, owner_id: &str) -> Result<Vec<NoteTemplate>, TemplateStoreError>;
}
