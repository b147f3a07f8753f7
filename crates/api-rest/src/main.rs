//! Trivia API server binary.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use trivia_api_rest::{create_app, AppState, CliArgs};
use trivia_common::{init_tracing, AppConfig};
use trivia_infrastructure::{DatabasePool, InMemoryTriviaStore};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = args.load_config()?;

    init_tracing(&config.telemetry)?;

    info!(
        service = %config.telemetry.service_name,
        address = %config.server.address(),
        "Starting trivia API"
    );

    let address = config.server.address();
    let (state, pool) = build_state(config).await?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(address = %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    info!("Server stopped");
    Ok(())
}

/// Choose PostgreSQL when a database URL is configured, memory otherwise
async fn build_state(config: AppConfig) -> Result<(AppState, Option<DatabasePool>)> {
    if config.database.url.is_some() {
        let pool = DatabasePool::new(&config.database)
            .await
            .context("Failed to connect to database")?;
        pool.migrate().await.context("Failed to migrate database")?;

        info!("Using PostgreSQL storage");
        Ok((AppState::postgres(config, pool.clone()), Some(pool)))
    } else {
        info!("No database configured, using in-memory storage");
        let store = InMemoryTriviaStore::with_default_categories();
        Ok((AppState::in_memory(config, store), None))
    }
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Received shutdown signal");
}
