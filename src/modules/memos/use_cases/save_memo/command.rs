use crate::shared::core::primitives::Timestamp;

/// Creates a memo when `memo_id` is `None`, otherwise edits the existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMemo {
    pub memo_id: Option<String>,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub reminder_time: Timestamp,
    pub priority: Option<u8>,
    pub now: Timestamp,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MemoRejection {
    #[error("memo title must not be empty")]
    EmptyTitle,

    #[error("memo priority must be between 1 and 3, got {0}")]
    PriorityOutOfRange(u8),
}
