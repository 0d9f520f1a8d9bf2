//! HTTP server: bind, serve, drain on shutdown.

use std::future::Future;

use anyhow::{Context, Result};
use axum::Router;
use companies::CompaniesConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Companies router wrapped with request tracing.
#[must_use]
pub fn build_app(data: &CompaniesConfig) -> Router {
    companies::router(data).layer(
        TraceLayer::new_for_http().make_span_with(|req: &axum::http::Request<axum::body::Body>| {
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri(),
            )
        }),
    )
}

/// Serves until `shutdown` resolves, then lets in-flight requests finish.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<F>(config: &AppConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        addr = %listener.local_addr().map_or_else(|_| addr.clone(), |a| a.to_string()),
        companies_dir = %config.data.companies_dir.display(),
        employees_dir = %config.data.employees_dir.display(),
        "Server is running"
    );

    axum::serve(listener, build_app(&config.data))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on the first Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the failure is logged and the other
/// signal is still awaited; with neither available this never resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending().await
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "Shutdown signal received, draining connections");
}
