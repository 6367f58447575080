use crate::modules::memos::core::memo::Memo;
use crate::shared::core::primitives::Timestamp;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoStoreError {
    #[error("memo {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait MemoStore: Send + Sync {
    /// Soft-deleted memos resolve to `None`.
    async fn get(&self, memo_id: &str) -> Result<Option<Memo>, MemoStoreError>;

    /// Inserts or replaces by memo id.
    async fn save(&self, memo: Memo) -> Result<(), MemoStoreError>;

    /// Live memos of `owner_id` with a reminder in `[from, before)`, earliest first.
    async fn list_between(
        &self,
        owner_id: &str,
        from: Timestamp,
        before: Timestamp,
    ) -> Result<Vec<Memo>, MemoStoreError>;
}
