use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::activity_records::core::record::Tag;
use crate::modules::activity_records::use_cases::list_records_by_day::projection::RecordView;
use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTag {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<Tag> for GqlTag {
    fn from(tag: Tag) -> Self {
        Self {
            name: tag.name,
            icon: tag.icon,
            color: tag.color,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRecord {
    pub record_id: String,
    pub content: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub duration_ms: Option<i64>,
    pub tags: Vec<GqlTag>,
    pub source: String,
    pub audio_path: Option<String>,
}

impl From<RecordView> for GqlRecord {
    fn from(v: RecordView) -> Self {
        Self {
            record_id: v.record_id,
            content: v.content,
            start_time: v.start_time,
            end_time: v.end_time,
            duration_ms: v.duration_ms,
            tags: v.tags.into_iter().map(Into::into).collect(),
            source: v.source.as_str().to_string(),
            audio_path: v.audio_path,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Records starting on the calendar day that contains `day` (default: today).
    async fn records_by_day(
        &self,
        context: &Context<'_>,
        owner_id: String,
        day: Option<i64>,
    ) -> GqlResult<Vec<GqlRecord>> {
        let state = context.data_unchecked::<AppState>();
        let day = day.unwrap_or_else(|| Utc::now().timestamp_millis());
        if !is_supported(day) {
            return Err(async_graphql::Error::new("day is out of range"));
        }
        let list = state.list_records_handler.handle(&owner_id, day).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
