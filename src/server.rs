//! HTTP server initialization and runtime setup.
//!
//! Handles store setup, dependency wiring and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::{ClickRepository, LinkRepository, StoreHealth};
use crate::infrastructure::persistence::{MongoClickRepository, MongoLinkRepository, MongoStore};
use crate::routes::app_router;
use crate::state::{AppState, StoreSettings};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client (or an unconfigured store when `DATABASE_URL` is missing)
/// - Unique index on link codes
/// - Axum HTTP server with graceful shutdown
///
/// A store that cannot be reached at startup is logged, not fatal.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(
        MongoStore::connect(
            config.database_url.as_deref(),
            config.database_name.as_deref(),
            config.store_timeout(),
        )
        .await,
    );

    if store.is_configured() {
        if let Err(e) = store.ensure_indexes().await {
            tracing::warn!("Could not ensure store indexes, retrying before first insert: {}", e);
        }
    }

    let link_repository: Arc<dyn LinkRepository> =
        Arc::new(MongoLinkRepository::new(store.clone()));
    let click_repository: Arc<dyn ClickRepository> =
        Arc::new(MongoClickRepository::new(store.clone()));
    let store_health: Arc<dyn StoreHealth> = store;

    let state = AppState::new(
        link_repository,
        click_repository,
        store_health,
        StoreSettings {
            database_url_set: config.database_url.is_some(),
            database_name_set: config.database_name.is_some(),
        },
        config.behind_proxy,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
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
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("signal error: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
