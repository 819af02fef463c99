//! Axum router assembly.

use axum::Router;
use axum::handler::Handler;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Static files under the assets directory win; anything else, directories
/// included, falls through to the SPA shell. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    let assets = ServeDir::new(state.assets_dir())
        .append_index_html_on_directories(false)
        .fallback(crate::shell::serve.with_state(state.clone()));

    Router::new()
        .route("/", get(crate::shell::serve))
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
