//! scribe-web: browser front-end for audio transcription.
//!
//! Serves a single-page UI plus a small JSON API. Uploads are staged to
//! per-session temp files; each transcribe press sends one request to the
//! configured OpenAI-compatible API as a cancellable background task.

mod error;
mod handlers;
mod router;
mod server;
mod session;

use std::sync::Arc;

use anyhow::Result;
use scribe_core::{Config, OpenAiProvider, build_http_client};
use tokio::sync::watch;

use crate::server::WebServer;

const BIND_ENV: &str = "SCRIBE_BIND";
const PORT_ENV: &str = "SCRIBE_PORT";
const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Missing credential is fatal at startup, before the server binds
    let config = Config::from_env()?;
    let backend = Arc::new(OpenAiProvider::from_config(build_http_client()?, &config));

    let bind = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let port = std::env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    WebServer::new(&bind, port, backend, shutdown_rx)
        .serve()
        .await
}
