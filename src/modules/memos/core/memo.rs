// Reminder ("memo") owned by one user.
//
// Lifecycle
// - Created or edited by the user, toggled complete and back, soft-deleted.
// - completed_at is set exactly while is_completed is true.

use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 3;
pub const DEFAULT_PRIORITY: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub memo_id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub reminder_time: Timestamp,
    pub priority: u8,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Which memos of a day a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoStatusFilter {
    All,
    #[default]
    Pending,
    Completed,
}

impl MemoStatusFilter {
    pub fn admits(&self, memo: &Memo) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !memo.is_completed,
            Self::Completed => memo.is_completed,
        }
    }
}

impl Memo {
    pub fn toggle_completed(&mut self, now: Timestamp) {
        self.is_completed = !self.is_completed;
        self.completed_at = self.is_completed.then_some(now);
        self.updated_at = now;
    }
}
