//! Course Batch Service - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_batch_service::{
    config::Config, create_router, state::AppState, store::InMemoryBatchStore,
    validation::BatchRequestValidator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting course batch service...");
    tracing::info!("Environment: {}", config.environment);

    // Create application state
    let store = Arc::new(InMemoryBatchStore::new());
    let validator = BatchRequestValidator::with_defaults();
    let state = AppState::new(store, validator, config.clone());

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
