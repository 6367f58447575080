// Time primitives shared by every module.
//
// Timestamps
// - All i64 values are epoch milliseconds.
// - Inbound surfaces only accept timestamps between years 1 and 9999; the calendar
//   clamps anything else so it never overflows.
//
// Calendar
// - Day boundaries follow the wall clock of one IANA time zone chosen per deployment,
//   so days are 23 or 25 hours long across DST switches.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

pub type Timestamp = i64;

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// 0001-01-01T00:00:00Z
pub const MIN_TIMESTAMP: Timestamp = -62_135_596_800_000;
/// 9999-12-31T23:59:59.999Z
pub const MAX_TIMESTAMP: Timestamp = 253_402_300_799_999;

/// Hour of the prior day from which the preceding-record lookback starts.
pub const EVENING_LOOKBACK_HOUR: u32 = 22;

// DST gaps start and end on quarter hours and never exceed a day.
const GAP_STEP_MINUTES: i64 = 15;
const MAX_GAP_STEPS: usize = 24 * 4;

pub fn is_supported(at: Timestamp) -> bool {
    (MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(&at)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCalendar {
    tz: Tz,
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl LocalCalendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    fn local_date(&self, at: Timestamp) -> NaiveDate {
        DateTime::from_timestamp_millis(at.clamp(MIN_TIMESTAMP, MAX_TIMESTAMP))
            .unwrap_or_default()
            .with_timezone(&self.tz)
            .date_naive()
    }

    /// First instant showing `wall` on the local clock. A wall time skipped by a DST
    /// jump resolves to the end of the gap.
    fn resolve(&self, wall: NaiveDateTime) -> Timestamp {
        let mut candidate = wall;
        for _ in 0..=MAX_GAP_STEPS {
            if let Some(at) = self.tz.from_local_datetime(&candidate).earliest() {
                return at.timestamp_millis();
            }
            match candidate.checked_add_signed(TimeDelta::minutes(GAP_STEP_MINUTES)) {
                Some(next) => candidate = next,
                None => break,
            }
        }
        wall.and_utc().timestamp_millis()
    }

    /// Local midnight at or before `at`.
    pub fn day_start(&self, at: Timestamp) -> Timestamp {
        self.resolve(self.local_date(at).and_time(NaiveTime::MIN))
    }

    /// The midnight that ends the calendar day containing `at`.
    pub fn next_midnight(&self, at: Timestamp) -> Timestamp {
        let date = self.local_date(at);
        let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
        self.resolve(next.and_time(NaiveTime::MIN))
    }

    pub fn same_day(&self, a: Timestamp, b: Timestamp) -> bool {
        self.local_date(a) == self.local_date(b)
    }

    /// 22:00 of the day before the one containing `cutoff`.
    pub fn lookback_start(&self, cutoff: Timestamp) -> Timestamp {
        let date = self.local_date(cutoff);
        let prior = date.checked_sub_days(Days::new(1)).unwrap_or(date);
        let evening = prior
            .and_hms_opt(EVENING_LOOKBACK_HOUR, 0, 0)
            .unwrap_or_else(|| prior.and_time(NaiveTime::MIN));
        self.resolve(evening)
    }

    /// Number of midnights strictly after `from` and at or before `to`.
    pub fn midnights_between(&self, from: Timestamp, to: Timestamp) -> i64 {
        if to <= from {
            return 0;
        }
        self.local_date(to)
            .signed_duration_since(self.local_date(from))
            .num_days()
    }

    /// Human readable local time, used in log lines.
    pub fn label(&self, at: Timestamp) -> String {
        DateTime::from_timestamp_millis(at)
            .map(|utc| {
                utc.with_timezone(&self.tz)
                    .format("%Y-%m-%d %H:%M %Z")
                    .to_string()
            })
            .unwrap_or_else(|| at.to_string())
    }
}
