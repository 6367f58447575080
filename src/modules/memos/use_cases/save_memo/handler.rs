use crate::modules::memos::core::memo::{DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY, Memo};
use crate::modules::memos::core::ports::MemoStore;
use crate::modules::memos::use_cases::save_memo::command::{MemoRejection, SaveMemo};
use crate::shared::core::application_error::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct SaveMemoHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    store: Arc<TMemoStore>,
}

impl<TMemoStore> SaveMemoHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TMemoStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveMemo) -> Result<Memo, ApplicationError> {
        let title = command.title.trim().to_string();
        if title.is_empty() {
            return Err(ApplicationError::Domain(MemoRejection::EmptyTitle.to_string()));
        }
        let priority = command.priority.unwrap_or(DEFAULT_PRIORITY);
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(ApplicationError::Domain(
                MemoRejection::PriorityOutOfRange(priority).to_string(),
            ));
        }

        let memo = match command.memo_id {
            Some(memo_id) => {
                let mut memo = self
                    .store
                    .get(&memo_id)
                    .await?
                    .filter(|memo| memo.owner_id == command.owner_id)
                    .ok_or(ApplicationError::NotFound(memo_id))?;
                memo.title = title;
                memo.content = command.content;
                memo.reminder_time = command.reminder_time;
                memo.priority = priority;
                memo.updated_at = command.now;
                memo
            }
            None => Memo {
                memo_id: Uuid::now_v7().to_string(),
                owner_id: command.owner_id,
                title,
                content: command.content,
                reminder_time: command.reminder_time,
                priority,
                is_completed: false,
                completed_at: None,
                is_deleted: false,
                created_at: command.now,
                updated_at: command.now,
            },
        };
        self.store.save(memo.clone()).await?;
        Ok(memo)
    }
}
