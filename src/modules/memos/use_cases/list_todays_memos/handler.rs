use crate::modules::memos::core::memo::{Memo, MemoStatusFilter};
use crate::modules::memos::core::ports::MemoStore;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::{LocalCalendar, Timestamp};
use std::sync::Arc;

/// Memos due on the calendar day containing `day`, narrowed by completion status.
pub struct ListTodaysMemosHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    store: Arc<TMemoStore>,
    calendar: LocalCalendar,
}

impl<TMemoStore> ListTodaysMemosHandler<TMemoStore>
where
    TMemoStore: MemoStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TMemoStore>, calendar: LocalCalendar) -> Self {
        Self { store, calendar }
    }

    pub async fn handle(
        &self,
        owner_id: &str,
        day: Timestamp,
        status: MemoStatusFilter,
    ) -> Result<Vec<Memo>, ApplicationError> {
        let memos = self
            .store
            .list_between(
                owner_id,
                self.calendar.day_start(day),
                self.calendar.next_midnight(day),
            )
            .await?;
        Ok(memos.into_iter().filter(|memo| status.admits(memo)).collect())
    }
}
