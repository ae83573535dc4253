//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, wires the shortener into [`AppState`] and runs
//! the Axum server until a shutdown signal arrives.

use crate::config::{Config, StorageBackend};
use crate::domain::clock::{Clock, SystemClock};
use crate::infrastructure::persistence::{
    MemoryAccessLogRepository, MemoryUrlRepository, PgAccessLogRepository, PgUrlRepository,
    pg_pool,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Notify;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool with retries, then migrations (postgres backend)
/// - In-process maps (memory backend)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = app_router(state, config.request_timeout);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown({
            let shutdown = shutdown.clone();
            async move {
                shutdown_signal().await;
                shutdown.notify_one();
            }
        });

    let grace_period = config.grace_period;
    tokio::select! {
        result = server.into_future() => result?,
        _ = async {
            shutdown.notified().await;
            tokio::time::sleep(grace_period).await;
        } => {
            tracing::warn!(?grace_period, "Grace period elapsed, dropping in-flight requests");
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let settings = config.shortener_settings()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = pg_pool::connect(config).await?;
            pg_pool::migrate(&pool).await?;

            let pool = Arc::new(pool);
            AppState::from_repositories(
                Arc::new(PgUrlRepository::new(pool.clone(), config.db_timeout)),
                Arc::new(PgAccessLogRepository::new(pool, config.db_timeout)),
                settings,
                clock,
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            AppState::from_repositories(
                Arc::new(MemoryUrlRepository::new()),
                Arc::new(MemoryAccessLogRepository::new()),
                settings,
                clock,
            )
        }
    };

    Ok(state)
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
