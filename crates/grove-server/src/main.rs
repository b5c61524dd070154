use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let addr = env::var("GROVE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

    // Fail fast on a missing credential: a blank key would otherwise
    // surface as a 500 on the first request.
    let openai = grove_openai::OpenAiClient::new(api_key)?;

    let app = router(AppState { openai });

    tracing::info!(%addr, "starting grove server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/get-motivation", post(routes::motivation::get_motivation))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
