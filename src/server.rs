//! HTTP server initialization and runtime setup.
//!
//! Builds the link store and slug generator from [`Config`], wires them into
//! [`AppState`], and runs the Axum server until a shutdown signal arrives.

use crate::application::services::LinkService;
use crate::config::{Config, SlugSource, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, SqliteLinkRepository};
use crate::infrastructure::persistence::sqlite_link_repository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::slug_generator::{OsSlugGenerator, RandomSlugGenerator, SlugGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Creates the link repository selected by `config.storage`.
///
/// # Errors
///
/// Returns an error if the SQLite database cannot be opened or migrated.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory link store");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
        StorageBackend::Sqlite => {
            let pool =
                sqlite_link_repository::connect(&config.database_url, config.db_max_connections)
                    .await
                    .context("Failed to open SQLite database")?;
            tracing::info!("Connected to database");

            Ok(Arc::new(SqliteLinkRepository::new(Arc::new(pool))))
        }
    }
}

/// Creates the slug generator selected by `config.slug_source`.
pub fn build_slug_generator(config: &Config) -> Arc<dyn SlugGenerator> {
    match config.slug_source {
        SlugSource::Random => Arc::new(RandomSlugGenerator::new(config.slug_length)),
        SlugSource::Os => Arc::new(OsSlugGenerator::new(config.slug_length)),
    }
}

/// Builds the full application state for `config`.
///
/// # Errors
///
/// See [`build_repository`].
pub async fn build_state(config: &Config) -> Result<AppState> {
    let repository = build_repository(config).await?;
    let generator = build_slug_generator(config);

    let link_service = Arc::new(LinkService::new(
        repository,
        generator,
        config.slug_max_attempts,
    ));

    Ok(AppState::new(link_service, config.max_body_bytes))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
