use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use shift_tracker::modules::stoppages::adapters::outbound::stoppage_row::StoppageRow;
use shift_tracker::modules::stoppages::application::stoppage_store::StoppageStore;
use shift_tracker::shared::core::primitives::{SystemClock, TimeProvider};
use shift_tracker::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use shift_tracker::shell::config::AppConfig;
use shift_tracker::shell::graphql::{AppSchema, build_schema};
use shift_tracker::shell::http;
use shift_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let time = TimeProvider::new(Arc::new(SystemClock), config.utc_offset);

    // In-memory record store for now
    let records = Arc::new(InMemoryRecordStore::<StoppageRow>::new());
    let stoppages = Arc::new(StoppageStore::load(records, time).await?);
    let state = AppState { stoppages };

    let schema = build_schema(state.clone());

    let app = http::router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(utc_offset = %config.utc_offset, "HTTP API: http://{}/stoppages", config.bind_addr);
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
