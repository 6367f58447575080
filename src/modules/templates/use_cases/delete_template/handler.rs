use crate::modules::templates::core::ports::TemplateStore;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::Timestamp;
use std::sync::Arc;

pub struct DeleteTemplateHandler<TTemplateStore>
where
    TTemplateStore: TemplateStore + Send + Sync + 'static,
{
    store: Arc<TTemplateStore>,
}

impl<TTemplateStore> DeleteTemplateHandler<TTemplateStore>
where
    TTemplateStore: TemplateStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TTemplateStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        template_id: &str,
        owner_id: &str,
        now: Timestamp,
    ) -> Result<(), ApplicationError> {
        let mut template = self
            .store
            .get(template_id)
            .await?
            .filter(|template| template.owner_id == owner_id)
            .ok_or_else(|| ApplicationError::NotFound(template_id.to_string()))?;
        template.is_deleted = true;
        template.updated_at = now;
        self.store.save(template).await?;
        Ok(())
    }
}
