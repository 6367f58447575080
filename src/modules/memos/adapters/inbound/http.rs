use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::memos::core::memo::MemoStatusFilter;
use crate::modules::memos::use_cases::save_memo::command::SaveMemo;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::is_supported;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SaveMemoBody {
    pub memo_id: Option<String>,
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub reminder_time: i64,
    pub priority: Option<u8>,
}

#[derive(Deserialize)]
pub struct OwnerParams {
    pub owner_id: String,
}

#[derive(Deserialize)]
pub struct TodayParams {
    pub owner_id: String,
    pub day: Option<i64>,
    #[serde(default)]
    pub status: MemoStatusFilter,
}

fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Domain(_) => StatusCode::CONFLICT.into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn save(
    State(state): State<AppState>,
    body: Result<Json<SaveMemoBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if !is_supported(body.reminder_time) {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    let created = body.memo_id.is_none();
    let command = SaveMemo {
        memo_id: body.memo_id,
        owner_id: body.owner_id,
        title: body.title,
        content: body.content,
        reminder_time: body.reminder_time,
        priority: body.priority,
        now: Utc::now().timestamp_millis(),
    };
    match state.save_memo_handler.handle(command).await {
        Ok(memo) if created => (StatusCode::CREATED, Json(memo)).into_response(),
        Ok(memo) => Json(memo).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn list_today(
    State(state): State<AppState>,
    Query(params): Query<TodayParams>,
) -> impl IntoResponse {
    let day = params.day.unwrap_or_else(|| Utc::now().timestamp_millis());
    if !is_supported(day) {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    match state
        .list_memos_handler
        .handle(&params.owner_id, day, params.status)
        .await
    {
        Ok(memos) => Json(memos).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(memo_id): Path<String>,
    Query(params): Query<OwnerParams>,
) -> impl IntoResponse {
    match state
        .toggle_memo_handler
        .handle(&memo_id, &params.owner_id, Utc::now().timestamp_millis())
        .await
    {
        Ok(memo) => Json(memo).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(memo_id): Path<String>,
    Query(params): Query<OwnerParams>,
) -> impl IntoResponse {
    match state
        .delete_memo_handler
        .handle(&memo_id, &params.owner_id, Utc::now().timestamp_millis())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod memos_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{delete, get, post},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activity_records::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
    use crate::modules::memos::adapters::outbound::memo_store_in_memory::InMemoryMemoStore;
    use crate::modules::memos::core::ports::MemoStore;
    use crate::shared::core::primitives::LocalCalendar;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::memos::MemoBuilder;
    use crate::tests::fixtures::records::at;

    async fn make_test_state() -> (AppState, Arc<InMemoryMemoStore>) {
        let memos = InMemoryMemoStore::new();
        memos
            .save(MemoBuilder::new("m-1").reminder_time(at(2, 9, 0)).build())
            .await
            .unwrap();
        let memos = Arc::new(memos);
        let state = AppState::new(
            Arc::new(InMemoryRecordStore::new()),
            memos.clone(),
            LocalCalendar::utc(),
        );
        (state, memos)
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/memos", post(super::save))
            .route("/memos/today", get(super::list_today))
            .route("/memos/{memo_id}/toggle", post(super::toggle))
            .route("/memos/{memo_id}", delete(super::delete))
            .with_state(state)
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_when_creating_a_memo() {
        let (state, _) = make_test_state().await;
        let body = r#"{"owner_id":"owner-0001","title":"买菜","reminder_time":1709380000000}"#;
        let response = app(state)
            .oneshot(
                Request::post("/memos")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_of(response).await;
        assert_eq!(json["title"], "买菜");
        assert_eq!(json["priority"], 2);
    }

    #[tokio::test]
    async fn it_should_return_409_on_an_out_of_range_priority() {
        let (state, _) = make_test_state().await;
        let body = r#"{"owner_id":"owner-0001","title":"买菜","reminder_time":0,"priority":7}"#;
        let response = app(state)
            .oneshot(
                Request::post("/memos")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_list_todays_pending_memos() {
        let (state, _) = make_test_state().await;
        let response = app(state)
            .oneshot(
                Request::get(format!("/memos/today?owner_id=owner-0001&day={}", at(2, 12, 0)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json[0]["memo_id"], "m-1");
    }

    #[tokio::test]
    async fn it_should_list_completed_memos_when_asked() {
        let (state, memos) = make_test_state().await;
        memos
            .save(
                MemoBuilder::new("m-2")
                    .reminder_time(at(2, 10, 0))
                    .completed_at(at(2, 10, 5))
                    .build(),
            )
            .await
            .unwrap();
        let response = app(state)
            .oneshot(
                Request::get(format!(
                    "/memos/today?owner_id=owner-0001&day={}&status=completed",
                    at(2, 12, 0)
                ))
                .body(Body::empty())
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["memo_id"], "m-2");
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_day_out_of_range() {
        let (state, _) = make_test_state().await;
        let response = app(state)
            .oneshot(
                Request::get(format!("/memos/today?owner_id=owner-0001&day={}", i64::MAX))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_reminder_out_of_range() {
        let (state, _) = make_test_state().await;
        let body = format!(
            r#"{{"owner_id":"owner-0001","title":"买菜","reminder_time":{}}}"#,
            i64::MIN
        );
        let response = app(state)
            .oneshot(
                Request::post("/memos")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_toggle_a_memo() {
        let (state, memos) = make_test_state().await;
        let response = app(state)
            .oneshot(
                Request::post("/memos/m-1/toggle?owner_id=owner-0001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(memos.get("m-1").await.unwrap().unwrap().is_completed);
    }

    #[tokio::test]
    async fn it_should_return_204_on_delete_and_404_afterwards() {
        let (state, _) = make_test_state().await;
        let request = || {
            Request::delete("/memos/m-1?owner_id=owner-0001")
                .body(Body::empty())
                .unwrap()
        };
        let first = app(state.clone()).oneshot(request()).await.unwrap();
        let second = app(state).oneshot(request()).await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}
