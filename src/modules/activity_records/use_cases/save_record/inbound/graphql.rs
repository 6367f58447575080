use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activity_records::core::record::{RecordSource, Tag};
use crate::modules::activity_records::use_cases::save_record::command::SaveRecord;
use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlTagInput {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<GqlTagInput> for Tag {
    fn from(input: GqlTagInput) -> Self {
        Tag::new(input.name, input.icon, input.color)
    }
}

#[derive(Default)]
pub struct SaveRecordMutation;

#[Object]
impl SaveRecordMutation {
    /// Saves a record and stitches the timeline in front of it. Returns the record id.
    async fn save_record(
        &self,
        context: &Context<'_>,
        owner_id: String,
        content: String,
        start_time: Option<i64>,
        tags: Option<Vec<GqlTagInput>>,
        audio_path: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let now = Utc::now().timestamp_millis();
        if !start_time.is_none_or(is_supported) {
            return Err(async_graphql::Error::new("start_time is out of range"));
        }

        let command = SaveRecord {
            owner_id,
            content,
            start_time: start_time.unwrap_or(now),
            tags: tags
                .unwrap_or_default()
                .into_iter()
                .map(Tag::from)
                .collect(),
            source: if audio_path.is_some() {
                RecordSource::Voice
            } else {
                RecordSource::Manual
            },
            audio_path,
            created_at: now,
        };

        let outcome = state
            .save_record_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(outcome.record_id))
    }
}
