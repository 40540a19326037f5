use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use scribe_core::TranscriptionBackend;
use tokio::sync::watch;

use crate::router::build_router;
use crate::session::SessionStore;

/// Shared state handed to every handler. The backend is injected, never
/// constructed inside a handler, so tests swap in a scripted fake.
#[derive(Clone)]
pub(crate) struct AppState {
    pub backend: Arc<dyn TranscriptionBackend>,
    pub sessions: SessionStore,
    pub started_at: Instant,
}

pub(crate) struct WebServer {
    addr: SocketAddr,
    backend: Arc<dyn TranscriptionBackend>,
    shutdown_rx: watch::Receiver<bool>,
}

impl WebServer {
    pub fn new(
        bind: &str,
        port: u16,
        backend: Arc<dyn TranscriptionBackend>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        let addr: SocketAddr = format!("{bind}:{port}").parse().unwrap_or_else(|e| {
            tracing::warn!("invalid bind '{bind}': {e}, falling back to 127.0.0.1:{port}");
            SocketAddr::from(([127, 0, 0, 1], port))
        });

        Self {
            addr,
            backend,
            shutdown_rx,
        }
    }

    /// Start serving the UI and API.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or encounters a fatal
    /// I/O error.
    pub async fn serve(self) -> anyhow::Result<()> {
        let state = AppState {
            backend: self.backend,
            sessions: SessionStore::new(),
            started_at: Instant::now(),
        };
        let router = build_router(state);

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind {}: {e}", self.addr))?;
        tracing::info!("scribe-web listening on http://{}", self.addr);

        let mut shutdown_rx = self.shutdown_rx;
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                while !*shutdown_rx.borrow_and_update() {
                    if shutdown_rx.changed().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                }
                tracing::info!("scribe-web shutting down");
            })
            .await?;

        Ok(())
    }
}
