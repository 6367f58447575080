use crate::shared::core::primitives::Timestamp;

/// Skip a run when the previous one for the same owner is too recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    pub last_run_at: Timestamp,
    pub min_interval_ms: i64,
}

impl Debounce {
    pub fn suppresses(&self, as_of: Timestamp) -> bool {
        as_of >= self.last_run_at && as_of.saturating_sub(self.last_run_at) < self.min_interval_ms
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFillSleep {
    pub owner_id: String,
    pub as_of: Timestamp,
    pub debounce: Option<Debounce>,
}
