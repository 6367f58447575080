use crate::modules::memos::core::memo::Memo;
use crate::modules::memos::core::ports::{MemoStore, MemoStoreError};
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryMemoStore {
    memos: RwLock<HashMap<String, Memo>>,
    offline: bool,
}

impl InMemoryMemoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Raw view including soft-deleted memos.
    pub async fn snapshot(&self) -> Vec<Memo> {
        self.memos.read().await.values().cloned().collect()
    }

    fn ensure_online(&self) -> Result<(), MemoStoreError> {
        if self.offline {
            return Err(MemoStoreError::Backend("Memo store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MemoStore for InMemoryMemoStore {
    async fn get(&self, memo_id: &str) -> Result<Option<Memo>, MemoStoreError> {
        self.ensure_online()?;
        Ok(self
            .memos
            .read()
            .await
            .get(memo_id)
            .filter(|memo| !memo.is_deleted)
            .cloned())
    }

    async fn save(&self, memo: Memo) -> Result<(), MemoStoreError> {
        self.ensure_online()?;
        self.memos.write().await.insert(memo.memo_id.clone(), memo);
        Ok(())
    }

    async fn list_between(
        &self,
        owner_id: &str,
        from: Timestamp,
        before: Timestamp,
    ) -> Result<Vec<Memo>, MemoStoreError> {
        self.ensure_online()?;
        let guard = self.memos.read().await;
        let mut memos: Vec<Memo> = guard
            .values()
            .filter(|memo| {
                !memo.is_deleted
                    && memo.owner_id == owner_id
                    && memo.reminder_time >= from
                    && memo.reminder_time < before
            })
            .cloned()
            .collect();
        memos.sort_by_key(|memo| (memo.reminder_time, memo.created_at));
        Ok(memos)
    }
}
