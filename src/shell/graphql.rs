use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::activity_records::use_cases::auto_fill_sleep::inbound::graphql::AutoFillMutation;
pub use crate::modules::activity_records::use_cases::list_records_by_day::inbound::graphql::QueryRoot;
pub use crate::modules::activity_records::use_cases::save_record::inbound::graphql::SaveRecordMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(SaveRecordMutation, AutoFillMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
