// Stitches the timeline in front of a new cutoff.
//
// Responsibilities
// - Look up the preceding record; a failed lookup is returned to the caller.
// - Plan with the pure stitcher, then write the plan best-effort: a failed update or
//   filler insert is logged and counted, never returned.
// - Filler inserts go through the store's guarded insert, so re-running a stitch
//   never duplicates a filler.

use crate::modules::activity_records::core::ports::RecordStore;
use crate::modules::activity_records::core::record::RecordPatch;
use crate::modules::activity_records::core::stitch::{StitchPlan, fill_guard, plan_stitch};
use crate::modules::activity_records::use_cases::find_preceding_record::handler::find_preceding_record;
use crate::modules::activity_records::use_cases::stitch_timeline::report::StitchReport;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::{LocalCalendar, Timestamp};
use std::sync::Arc;

pub struct StitchTimelineHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
    calendar: LocalCalendar,
}

impl<TRecordStore> StitchTimelineHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TRecordStore>, calendar: LocalCalendar) -> Self {
        Self { store, calendar }
    }

    pub async fn handle(
        &self,
        owner_id: &str,
        cutoff: Timestamp,
        now: Timestamp,
    ) -> Result<StitchReport, ApplicationError> {
        let preceding =
            find_preceding_record(&*self.store, &self.calendar, owner_id, cutoff).await?;
        let plan = plan_stitch(&self.calendar, preceding.as_ref(), cutoff, now);

        if plan.unfilled_midnights > 0 {
            tracing::warn!(
                owner_id,
                cutoff = %self.calendar.label(cutoff),
                unfilled_midnights = plan.unfilled_midnights,
                "preceding sleep record is several days old; only the first midnight is filled"
            );
        }
        if plan.is_empty() {
            tracing::debug!(owner_id, cutoff = %self.calendar.label(cutoff), "timeline already contiguous");
        }

        Ok(apply_stitch_plan(&*self.store, plan, now).await)
    }
}

pub async fn apply_stitch_plan<TRecordStore>(
    store: &TRecordStore,
    plan: StitchPlan,
    now: Timestamp,
) -> StitchReport
where
    TRecordStore: RecordStore + ?Sized,
{
    let mut report = StitchReport::default();

    for update in plan.updates {
        match store
            .update(&update.record_id, RecordPatch::close_at(update.end_time, now))
            .await
        {
            Ok(()) => {
                tracing::info!(record_id = %update.record_id, end_time = update.end_time, "closed preceding record");
                report.updated = true;
            }
            Err(error) => {
                tracing::warn!(record_id = %update.record_id, %error, "failed to close preceding record");
                report.failed_writes += 1;
            }
        }
    }

    for filler in plan.inserts {
        let guard = fill_guard(&filler);
        let start_time = filler.start_time;
        match store.insert_unless_exists(&guard, filler).await {
            Ok(Some(record_id)) => {
                tracing::info!(%record_id, start_time, "inserted auto-filled sleep record");
                report.created = true;
            }
            Ok(None) => {
                tracing::debug!(start_time, "auto-filled sleep record already present");
                report.duplicate_skipped = true;
            }
            Err(error) => {
                tracing::warn!(start_time, %error, "failed to insert auto-filled sleep record");
                report.failed_writes += 1;
            }
        }
    }

    report
}
