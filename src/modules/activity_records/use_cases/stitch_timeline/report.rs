use serde::Serialize;

/// What a best-effort stitch actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StitchReport {
    pub updated: bool,
    pub created: bool,
    pub duplicate_skipped: bool,
    pub failed_writes: u32,
}

impl StitchReport {
    pub fn is_noop(&self) -> bool {
        !self.updated && !self.created && !self.duplicate_skipped && self.failed_writes == 0
    }
}
