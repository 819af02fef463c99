//! SPA shell fallback.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use repohelper_domain::route::Route;

use crate::state::AppState;

/// Serve the shell for any path that is not a static asset.
///
/// The body is always the shell, the client router renders the view. The
/// status follows [`Route::resolve`] so crawlers and scripts see a real 404.
pub async fn serve(State(state): State<AppState>, uri: Uri) -> Response {
    let route = Route::resolve(uri.path());
    let status = if route.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    tracing::debug!(path = uri.path(), ?route, %status, "serving spa shell");
    (status, Html(state.shell())).into_response()
}
