/// Words that mark a record as sleep or rest. Matched as plain substrings.
pub const SLEEP_KEYWORDS: [&str; 7] = ["睡觉", "睡眠", "休息", "就寝", "入睡", "睡", "困"];

pub fn is_sleep_record(content: &str) -> bool {
    SLEEP_KEYWORDS
        .iter()
        .any(|keyword| content.contains(keyword))
}
