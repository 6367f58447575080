use crate::modules::memos::core::memo::Memo;
use crate::modules::memos::core::ports::MemoStore;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::Timestamp;
use std::sync::Arc;

pub struct ToggleMemoHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    store: Arc<TMemoStore>,
}

impl<TMemoStore> ToggleMemoHandler<TMemoStore>
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
    ) -> Result<Memo, ApplicationError> {
        let mut memo = self
            .store
            .get(memo_id)
            .await?
            .filter(|memo| memo.owner_id == owner_id)
            .ok_or_else(|| ApplicationError::NotFound(memo_id.to_string()))?;
        memo.toggle_completed(now);
        self.store.save(memo.clone()).await?;
        Ok(memo)
    }
}
