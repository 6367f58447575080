use crate::modules::activity_records::core::ports::{RecordQuery, RecordStore};
use crate::modules::activity_records::use_cases::list_records_by_day::projection::RecordView;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::{LocalCalendar, Timestamp};
use std::sync::Arc;

pub struct ListRecordsByDayHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
    calendar: LocalCalendar,
}

impl<TRecordStore> ListRecordsByDayHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TRecordStore>, calendar: LocalCalendar) -> Self {
        Self { store, calendar }
    }

    /// Records starting on the calendar day that contains `day`, oldest first.
    pub async fn handle(
        &self,
        owner_id: &str,
        day: Timestamp,
    ) -> Result<Vec<RecordView>, ApplicationError> {
        let query = RecordQuery::for_owner(owner_id)
            .starting_within(self.calendar.day_start(day), self.calendar.next_midnight(day))
            .oldest_first();
        let records = self.store.query(&query).await?;
        Ok(records.into_iter().map(RecordView::from).collect())
    }
}
