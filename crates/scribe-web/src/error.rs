use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced to the page as an `{"error": "..."}` body.
///
/// One failed attempt is terminal for that attempt only; the session stays
/// usable and the page may retry.
#[derive(Debug, thiserror::Error)]
pub(crate) enum WebError {
    #[error("session not found")]
    SessionNotFound,
    #[error("no audio file uploaded")]
    NoUpload,
    #[error("a transcription is already in progress")]
    TranscriptionInFlight,
    #[error("no transcription in progress")]
    NotTranscribing,
    #[error("no transcript available")]
    NoTranscript,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            WebError::SessionNotFound => StatusCode::NOT_FOUND,
            WebError::NoUpload
            | WebError::TranscriptionInFlight
            | WebError::NotTranscribing
            | WebError::NoTranscript => StatusCode::CONFLICT,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
