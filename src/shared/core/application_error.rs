use crate::modules::activity_records::core::ports::RecordStoreError;
use crate::modules::memos::core::ports::MemoStoreError;
use crate::modules::tags::core::ports::TagStoreError;
use crate::modules::templates::core::ports::TemplateStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error(transparent)]
    MemoStore(#[from] MemoStoreError),

    #[error(transparent)]
    TagStore(#[from] TagStoreError),

    #[error(transparent)]
    TemplateStore(#[from] TemplateStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("not found: {0}")]
    NotFound(String),
}
