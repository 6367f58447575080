use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::modules::activity_records::use_cases::auto_fill_sleep::inbound::http as auto_fill_http;
use crate::modules::activity_records::use_cases::delete_record::inbound::http as delete_http;
use crate::modules::activity_records::use_cases::edit_record::inbound::http as edit_http;
use crate::modules::activity_records::use_cases::list_records_by_day::inbound::http as list_http;
use crate::modules::activity_records::use_cases::save_record::inbound::http as save_http;
use crate::modules::memos::adapters::inbound::http as memos_http;
use crate::modules::tags::adapters::inbound::http as tags_http;
use crate::modules::templates::adapters::inbound::http as templates_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/records", post(save_http::handle).get(list_http::handle))
        .route(
            "/records/{record_id}",
            patch(edit_http::handle).delete(delete_http::handle),
        )
        .route("/auto-fill", post(auto_fill_http::handle))
        .route("/memos", post(memos_http::save))
        .route("/memos/today", get(memos_http::list_today))
        .route("/memos/{memo_id}/toggle", post(memos_http::toggle))
        .route("/memos/{memo_id}", delete(memos_http::delete))
        .route("/tags", get(tags_http::list).post(tags_http::create))
        .route("/tags/{tag_id}", put(tags_http::update).delete(tags_http::delete))
        .route(
            "/templates",
            get(templates_http::list).post(templates_http::create),
        )
        .route(
            "/templates/{template_id}",
            put(templates_http::update).delete(templates_http::delete),
        )
        .with_state(state)
}
