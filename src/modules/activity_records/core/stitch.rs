// Pure stitching rules for keeping a timeline contiguous.
//
// Purpose
// - Given the record that precedes a cutoff, decide which end time to write and
//   whether an auto-filled sleep record is needed across the following midnight.
//
// Responsibilities
// - Produce a plan only. Reading the preceding record and writing the plan belong
//   to the stitch_timeline use case.
// - A plan is idempotent: re-planning against an already-stitched record is empty.

use crate::modules::activity_records::core::ports::RecordQuery;
use crate::modules::activity_records::core::record::{
    ActivityRecord, NewRecord, RecordSource, Tag,
};
use crate::modules::activity_records::core::sleep::is_sleep_record;
use crate::shared::core::primitives::{LocalCalendar, Timestamp};

pub const AUTO_FILL_CONTENT: &str = "sleep (auto-filled)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub record_id: String,
    pub end_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StitchPlan {
    pub updates: Vec<RecordUpdate>,
    pub inserts: Vec<NewRecord>,
    /// Midnights between the preceding record and the cutoff that the plan leaves unfilled.
    pub unfilled_midnights: i64,
}

impl StitchPlan {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.inserts.is_empty()
    }
}

pub fn plan_stitch(
    calendar: &LocalCalendar,
    preceding: Option<&ActivityRecord>,
    cutoff: Timestamp,
    now: Timestamp,
) -> StitchPlan {
    let Some(preceding) = preceding else {
        return StitchPlan::default();
    };
    if preceding.end_time == Some(cutoff) || cutoff <= preceding.start_time {
        return StitchPlan::default();
    }

    if !is_sleep_record(&preceding.content) || calendar.same_day(preceding.start_time, cutoff) {
        return StitchPlan {
            updates: vec![RecordUpdate {
                record_id: preceding.record_id.clone(),
                end_time: cutoff,
            }],
            ..StitchPlan::default()
        };
    }

    let midnight = calendar.next_midnight(preceding.start_time);
    let mut plan = StitchPlan {
        unfilled_midnights: calendar.midnights_between(preceding.start_time, cutoff) - 1,
        ..StitchPlan::default()
    };
    if preceding.end_time != Some(midnight) {
        plan.updates.push(RecordUpdate {
            record_id: preceding.record_id.clone(),
            end_time: midnight,
        });
    }
    if midnight < cutoff {
        plan.inserts.push(auto_fill_record(
            &preceding.owner_id,
            midnight,
            Some(cutoff),
            preceding.tags.clone(),
            now,
        ));
    }
    plan
}

pub fn auto_fill_record(
    owner_id: &str,
    start_time: Timestamp,
    end_time: Option<Timestamp>,
    tags: Vec<Tag>,
    now: Timestamp,
) -> NewRecord {
    NewRecord {
        owner_id: owner_id.to_string(),
        content: AUTO_FILL_CONTENT.to_string(),
        start_time,
        end_time,
        tags,
        source: RecordSource::Auto,
        audio_path: None,
        created_at: now,
    }
}

/// Existence check that keeps at most one filler per owner and start time.
pub fn fill_guard(record: &NewRecord) -> RecordQuery {
    RecordQuery::for_owner(record.owner_id.clone())
        .starting_at(record.start_time)
        .with_source(RecordSource::Auto)
}
