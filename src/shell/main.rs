use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use timeline_journal::modules::activity_records::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use timeline_journal::modules::memos::adapters::outbound::memo_store_in_memory::InMemoryMemoStore;
use timeline_journal::shell::config::AppConfig;
use timeline_journal::shell::graphql::{AppSchema, build_schema};
use timeline_journal::shell::http::router;
use timeline_journal::shell::state::AppState;
use timeline_journal::shell::workers::AutoFillWorker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        time_zone = %config.calendar.time_zone(),
        auto_fill_interval = ?config.auto_fill_interval,
        transcription_timeout = ?config.transcription_timeout,
        "configuration loaded"
    );

    // In-memory deps for now
    let records = Arc::new(InMemoryRecordStore::new());
    let memos = Arc::new(InMemoryMemoStore::new());
    let state = AppState::from_config(&config, records.clone(), memos);

    let worker = Arc::new(AutoFillWorker::new(
        records,
        state.auto_fill_handler.clone(),
        config.auto_fill_debounce,
    ));
    tokio::spawn(worker.run(config.auto_fill_interval));

    let schema = build_schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("HTTP endpoint: http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
