// Scheduled sleep auto-fill for one owner.
//
// Purpose
// - Keep the timeline contiguous across midnight when the user has not logged
//   anything yet today.
//
// Responsibilities
// - Honour the caller's debounce before touching storage.
// - Close last evening's sleep record at today's midnight.
// - Fill the gap between midnight and today's first record, or open an ongoing
//   filler when today is still empty. The filler insert is guarded.

use crate::modules::activity_records::core::auto_fill::plan_morning_fill;
use crate::modules::activity_records::core::ports::{RecordQuery, RecordStore};
use crate::modules::activity_records::core::sleep::is_sleep_record;
use crate::modules::activity_records::core::stitch::{auto_fill_record, fill_guard, plan_stitch};
use crate::modules::activity_records::use_cases::auto_fill_sleep::command::AutoFillSleep;
use crate::modules::activity_records::use_cases::auto_fill_sleep::report::AutoFillOutcome;
use crate::modules::activity_records::use_cases::stitch_timeline::handler::apply_stitch_plan;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::LocalCalendar;
use std::sync::Arc;

pub struct AutoFillSleepHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
    calendar: LocalCalendar,
}

impl<TRecordStore> AutoFillSleepHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TRecordStore>, calendar: LocalCalendar) -> Self {
        Self { store, calendar }
    }

    pub async fn handle(&self, command: AutoFillSleep) -> Result<AutoFillOutcome, ApplicationError> {
        let AutoFillSleep {
            owner_id,
            as_of,
            debounce,
        } = command;
        if debounce.is_some_and(|debounce| debounce.suppresses(as_of)) {
            tracing::debug!(%owner_id, "auto-fill debounced");
            return Ok(AutoFillOutcome::Debounced);
        }

        let today_start = self.calendar.day_start(as_of);
        let evening = RecordQuery::for_owner(owner_id.as_str())
            .starting_within(self.calendar.lookback_start(today_start), today_start)
            .newest_first()
            .limit(1);
        let Some(last_evening) = self.store.query(&evening).await?.into_iter().next() else {
            return Ok(AutoFillOutcome::NoEveningRecord);
        };
        if !is_sleep_record(&last_evening.content) {
            return Ok(AutoFillOutcome::NotSleep {
                content: last_evening.content,
            });
        }

        let plan = plan_stitch(&self.calendar, Some(&last_evening), today_start, as_of);
        let stitched = apply_stitch_plan(&*self.store, plan, as_of).await;

        let today = RecordQuery::for_owner(owner_id.as_str())
            .starting_within(today_start, self.calendar.next_midnight(as_of))
            .oldest_first()
            .limit(1);
        let first_today = self.store.query(&today).await?.into_iter().next();

        let mut created = false;
        if let Some(gap) = plan_morning_fill(today_start, first_today.as_ref()) {
            let filler = auto_fill_record(&owner_id, gap.start, gap.end, last_evening.tags, as_of);
            match self
                .store
                .insert_unless_exists(&fill_guard(&filler), filler)
                .await
            {
                Ok(Some(record_id)) => {
                    tracing::info!(%owner_id, %record_id, open_ended = gap.end.is_none(), "morning sleep gap filled");
                    created = true;
                }
                Ok(None) => tracing::debug!(%owner_id, "morning sleep gap already filled"),
                Err(error) => tracing::warn!(%owner_id, %error, "failed to fill morning sleep gap"),
            }
        }

        Ok(AutoFillOutcome::Processed {
            updated: stitched.updated,
            created,
        })
    }
}
