use crate::modules::activity_records::core::record::{NewRecord, RecordSource, Tag};
use crate::modules::activity_records::use_cases::save_record::{
    command::SaveRecord,
    decision::{DecideError, Decision},
};

pub fn decide_save(command: SaveRecord) -> Decision {
    if command.source == RecordSource::Auto {
        return Decision::Rejected {
            reason: DecideError::AutoSourceNotAllowed,
        };
    }
    let content = command.content.trim();
    if content.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyContent,
        };
    }
    Decision::Accepted {
        record: NewRecord {
            owner_id: command.owner_id,
            content: content.to_string(),
            start_time: command.start_time,
            end_time: None,
            tags: dedup_tags(command.tags),
            source: command.source,
            audio_path: command.audio_path,
            created_at: command.created_at,
        },
    }
}

/// Keeps the first tag for each name, in the order given.
pub fn dedup_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut kept: Vec<Tag> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !kept.iter().any(|existing| existing.name == tag.name) {
            kept.push(tag);
        }
    }
    kept
}
