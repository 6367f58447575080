use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::activity_records::use_cases::auto_fill_sleep::command::AutoFillSleep;
use crate::modules::activity_records::use_cases::auto_fill_sleep::report::AutoFillReport;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlAutoFillReport {
    pub success: bool,
    pub updated: bool,
    pub created: bool,
    pub message: String,
}

impl From<AutoFillReport> for GqlAutoFillReport {
    fn from(r: AutoFillReport) -> Self {
        Self {
            success: r.success,
            updated: r.updated,
            created: r.created,
            message: r.message,
        }
    }
}

#[derive(Default)]
pub struct AutoFillMutation;

#[Object]
impl AutoFillMutation {
    /// Triggered when the app comes to the foreground.
    async fn run_auto_fill(
        &self,
        context: &Context<'_>,
        owner_id: String,
    ) -> GqlResult<GqlAutoFillReport> {
        let state = context.data_unchecked::<AppState>();
        let command = AutoFillSleep {
            owner_id,
            as_of: Utc::now().timestamp_millis(),
            debounce: None,
        };
        let result = state.auto_fill_handler.handle(command).await;
        Ok(AutoFillReport::from_result(&result).into())
    }
}
