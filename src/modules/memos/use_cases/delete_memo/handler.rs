use crate::modules::memos::core::ports::MemoStore;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::Timestamp;
use std::sync::Arc;

pub struct DeleteMemoHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    store: Arc<TMemoStore>,
}

impl<TMemoStore> DeleteMemoHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TMemoStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        memo_id: &str,
        owner_id: &str,
        now: Timestamp,
    ) -> Result<(), ApplicationError> {
        let mut memo = self
            .store
            .get(memo_id)
            .await?
            .filter(|memo| memo.owner_id == owner_id)
            .ok_or_else(|| ApplicationError::NotFound(memo_id.to_string()))?;
        memo.is_deleted = true;
        memo.updated_at = now;
        self.store.save(memo).await?;
        Ok(())
    }
}
