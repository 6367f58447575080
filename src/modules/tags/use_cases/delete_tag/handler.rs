use crate::modules::tags::core::ports::TagStore;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::Timestamp;
use std::sync::Arc;

/// Soft-deletes a custom tag. Records already carrying it keep their copy.
pub struct DeleteTagHandler<TTagStore>
where
    TTagStore: TagStore + Send + Sync + 'static,
{
    store: Arc<TTagStore>,
}

impl<TTagStore> DeleteTagHandler<TTagStore>
where
    TTagStore: TagStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TTagStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        tag_id: &str,
        owner_id: &str,
        now: Timestamp,
    ) -> Result<(), ApplicationError> {
        let mut tag = self
            .store
            .get(tag_id)
            .await?
            .filter(|tag| tag.owner_id == owner_id)
            .ok_or_else(|| ApplicationError::NotFound(tag_id.to_string()))?;
        tag.is_deleted = true;
        tag.updated_at = now;
        self.store.save(tag).await?;
        Ok(())
    }
}
