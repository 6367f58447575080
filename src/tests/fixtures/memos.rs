use crate::modules::memos::core::memo::{DEFAULT_PRIORITY, Memo};
use crate::shared::core::primitives::Timestamp;

pub struct MemoBuilder {
    inner: Memo,
}

#[allow(dead_code)]
impl MemoBuilder {
    pub fn new(memo_id: impl Into<String>) -> Self {
        Self {
            inner: Memo {
                memo_id: memo_id.into(),
                owner_id: "owner-0001".to_string(),
                title: "交房租".to_string(),
                content: "记得转账".to_string(),
                reminder_time: 1_709_280_000_000,
                priority: DEFAULT_PRIORITY,
                is_completed: false,
                completed_at: None,
                is_deleted: false,
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_000,
            },
        }
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn reminder_time(mut self, v: Timestamp) -> Self {
        self.inner.reminder_time = v;
        self
    }

    pub fn completed_at(mut self, v: Timestamp) -> Self {
        self.inner.is_completed = true;
        self.inner.completed_at = Some(v);
        self
    }

    pub fn deleted(mut self) -> Self {
        self.inner.is_deleted = true;
        self
    }

    pub fn build(self) -> Memo {
        self.inner
    }
}
