use crate::modules::activity_records::core::record::ActivityRecord;
use crate::shared::core::primitives::Timestamp;

/// Gap between today's midnight and the first thing recorded today.
/// `end == None` means nothing has been recorded yet and sleep is still ongoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorningGap {
    pub start: Timestamp,
    pub end: Option<Timestamp>,
}

pub fn plan_morning_fill(
    today_start: Timestamp,
    first_record_today: Option<&ActivityRecord>,
) -> Option<MorningGap> {
    match first_record_today {
        None => Some(MorningGap {
            start: today_start,
            end: None,
        }),
        Some(first) if first.start_time > today_start => Some(MorningGap {
            start: today_start,
            end: Some(first.start_time),
        }),
        Some(_) => None,
    }
}
