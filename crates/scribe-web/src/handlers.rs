use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use scribe_core::{Language, StagedUpload, TranscriptionRequest};
use uuid::Uuid;

use crate::error::WebError;
use crate::server::AppState;
use crate::session::Phase;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Download filename for the transcript attachment
pub(crate) const TRANSCRIPT_FILENAME: &str = "transcription.txt";

pub(crate) async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
}

pub(crate) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

#[derive(serde::Serialize)]
struct LanguageEntry {
    name: &'static str,
    code: &'static str,
}

pub(crate) async fn languages_handler() -> impl IntoResponse {
    let languages: Vec<LanguageEntry> = Language::all()
        .iter()
        .map(|lang| LanguageEntry {
            name: lang.display_name(),
            code: lang.iso_code(),
        })
        .collect();
    Json(languages)
}

pub(crate) async fn create_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let id = state.sessions.create().await;
    tracing::debug!(%id, "session created");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id.to_string() })),
    )
}

/// Current phase plus whatever the phase carries, polled by the page
#[derive(serde::Serialize)]
pub(crate) struct SessionView {
    phase: &'static str,
    filename: Option<String>,
    transcript: Option<String>,
    error: Option<String>,
}

pub(crate) async fn session_state_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, WebError> {
    state
        .sessions
        .with(id, |session| {
            let (transcript, error) = match &session.phase {
                Phase::Result { text } => (Some(text.clone()), None),
                Phase::Error { message } => (None, Some(message.clone())),
                _ => (None, None),
            };
            Json(SessionView {
                phase: session.phase.as_str(),
                filename: session.upload.as_ref().map(|u| u.filename().to_string()),
                transcript,
                error,
            })
        })
        .await
        .ok_or(WebError::SessionNotFound)
}

pub(crate) async fn delete_session_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, WebError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WebError::SessionNotFound)
    }
}

pub(crate) async fn upload_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, WebError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| WebError::BadRequest("upload is missing a filename".into()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| WebError::BadRequest(e.to_string()))?;

        let staged = StagedUpload::stage(&bytes, &filename)
            .map_err(|e| WebError::BadRequest(e.to_string()))?;
        let size = staged.size();

        return state
            .sessions
            .with(id, |session| {
                if matches!(session.phase, Phase::Transcribing) {
                    return Err(WebError::TranscriptionInFlight);
                }
                // Replaces the previous upload; its temp file is deleted on drop
                session.upload = Some(staged);
                session.phase = Phase::Uploaded;
                tracing::info!(%id, filename = %filename, size, "audio staged");
                Ok(Json(serde_json::json!({
                    "status": "uploaded",
                    "filename": filename,
                    "size": size,
                })))
            })
            .await
            .ok_or(WebError::SessionNotFound)?;
    }

    Err(WebError::BadRequest("no file field in upload".into()))
}

#[derive(serde::Deserialize)]
pub(crate) struct TranscribeParams {
    language: String,
}

pub(crate) async fn transcribe_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(params): Json<TranscribeParams>,
) -> Result<impl IntoResponse, WebError> {
    let language: Language = params
        .language
        .parse()
        .map_err(WebError::BadRequest)?;

    let backend = state.backend.clone();
    let sessions = state.sessions.clone();

    // Re-read the staged file, flip to Transcribing, spawn the job and
    // record its abort handle all under one lock section, so a racing
    // second press or cancel can never observe Transcribing without the
    // matching handle in place. The spawned task's first lock acquisition
    // waits for this section to finish.
    state
        .sessions
        .with(id, |session| {
            if matches!(session.phase, Phase::Transcribing) {
                return Err(WebError::TranscriptionInFlight);
            }
            let upload = session.upload.as_ref().ok_or(WebError::NoUpload)?;
            let payload = upload
                .payload()
                .map_err(|e| WebError::Internal(format!("{e:#}")))?;
            let request: TranscriptionRequest = payload.into_request(Some(language));
            session.phase = Phase::Transcribing;

            let task = tokio::spawn(async move {
                let outcome = backend.transcribe(request).await;
                sessions
                    .with(id, |session| {
                        // Skip the write if the job was cancelled meanwhile
                        if !matches!(session.phase, Phase::Transcribing) {
                            return;
                        }
                        session.job = None;
                        session.phase = match outcome {
                            Ok(result) => {
                                tracing::info!(%id, chars = result.text.len(), "transcription finished");
                                Phase::Result { text: result.text }
                            }
                            Err(e) => {
                                tracing::warn!(%id, error = %format!("{e:#}"), "transcription failed");
                                Phase::Error {
                                    message: format!("{e:#}"),
                                }
                            }
                        };
                    })
                    .await;
            });
            session.job = Some(task.abort_handle());
            Ok(())
        })
        .await
        .ok_or(WebError::SessionNotFound)??;

    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "transcribing" })),
    ))
}

pub(crate) async fn cancel_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, WebError> {
    state
        .sessions
        .with(id, |session| {
            if !matches!(session.phase, Phase::Transcribing) {
                return Err(WebError::NotTranscribing);
            }
            if let Some(job) = session.job.take() {
                job.abort();
            }
            session.phase = Phase::Uploaded;
            tracing::info!(%id, "transcription cancelled");
            Ok(Json(serde_json::json!({ "status": "cancelled" })))
        })
        .await
        .ok_or(WebError::SessionNotFound)?
}

pub(crate) async fn download_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, WebError> {
    let text = state
        .sessions
        .with(id, |session| match &session.phase {
            Phase::Result { text } => Ok(text.clone()),
            _ => Err(WebError::NoTranscript),
        })
        .await
        .ok_or(WebError::SessionNotFound)??;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TRANSCRIPT_FILENAME}\""),
            ),
        ],
        text,
    ))
}
