//! Serves the tracking API.
//!
//! Configuration is read from the environment:
//!
//! - `TRACKBOARD_BIND`: listen address, default `127.0.0.1:3000`
//! - `TRACKBOARD_SEED`: optional JSON snapshot loaded at start-up
//! - `TRACKBOARD_REQUIRE_TIMELINE`: reject tasks created without a timeline
//! - `RUST_LOG`: log filter, default `trackboard=info`

use std::sync::Arc;

use mockable::DefaultClock;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use trackboard::{
    api::{self, AppState, MemoryBackend},
    config::AppConfig,
    project::adapters::memory::InMemoryProjectRepository,
    seed::Snapshot,
    task::adapters::memory::InMemoryTaskRepository,
    user::adapters::memory::InMemoryUserRepository,
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("trackboard=info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    let users = Arc::new(InMemoryUserRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());

    if let Some(path) = &config.seed {
        Snapshot::read(path)?
            .load(&*users, &*projects, &*tasks)
            .await?;
    }

    let state = AppState::<MemoryBackend>::new(
        users,
        projects,
        tasks,
        Arc::new(DefaultClock),
        config.task_validation,
    );
    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(address = %config.bind, "trackboard listening");
    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("trackboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
