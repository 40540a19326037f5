use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    cancel_handler, create_session_handler, delete_session_handler, download_handler,
    health_handler, index_handler, languages_handler, session_state_handler, transcribe_handler,
    upload_handler,
};
use crate::server::AppState;

/// Upload cap, matching the remote API's own file size limit
pub(crate) const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/sessions", post(create_session_handler))
        .route(
            "/api/sessions/{id}",
            get(session_state_handler).delete(delete_session_handler),
        )
        .route("/api/sessions/{id}/upload", post(upload_handler))
        .route("/api/sessions/{id}/transcribe", post(transcribe_handler))
        .route("/api/sessions/{id}/cancel", post(cancel_handler))
        .route("/api/sessions/{id}/transcript", get(download_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
