//! In-memory session state.
//!
//! One session per browser tab, keyed by UUID. A session owns the current
//! staged upload (at most one; a new upload replaces it and deletes the old
//! temp file) and walks the phase machine:
//!
//! Idle -> Uploaded -> Transcribing -> Result | Error, with Result/Error ->
//! Transcribing again on retry, resending the same staged file.

use std::collections::HashMap;
use std::sync::Arc;

use scribe_core::StagedUpload;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use uuid::Uuid;

/// Where a session currently is in the transcribe flow
#[derive(Debug)]
pub(crate) enum Phase {
    Idle,
    Uploaded,
    Transcribing,
    Result { text: String },
    Error { message: String },
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Uploaded => "uploaded",
            Phase::Transcribing => "transcribing",
            Phase::Result { .. } => "result",
            Phase::Error { .. } => "error",
        }
    }
}

pub(crate) struct Session {
    pub upload: Option<StagedUpload>,
    pub phase: Phase,
    /// Abort handle for an in-flight transcription task
    pub job: Option<AbortHandle>,
}

impl Session {
    fn new() -> Self {
        Self {
            upload: None,
            phase: Phase::Idle,
            job: None,
        }
    }
}

/// Shared map of live sessions
#[derive(Clone, Default)]
pub(crate) struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.lock().await.insert(id, Session::new());
        id
    }

    /// Run `f` against the session, or `None` if it does not exist
    pub async fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.inner.lock().await.get_mut(&id).map(f)
    }

    /// Drop a session, aborting any in-flight job and deleting its staged
    /// file (the `StagedUpload` drop removes the temp file)
    pub async fn remove(&self, id: Uuid) -> bool {
        match self.inner.lock().await.remove(&id) {
            Some(session) => {
                if let Some(job) = session.job {
                    job.abort();
                }
                true
            }
            None => false,
        }
    }
}
