//! Tesseract node binary entry point.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tesseract_node::{AppState, NodeConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tesseract_node=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = NodeConfig::default();
    if let Ok(bind) = std::env::var("TESSERACT_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid TESSERACT_BIND address '{bind}': {e}"))?;
    }
    if let Ok(secs) = std::env::var("TESSERACT_DRIFT_SECS") {
        let secs: u64 = secs
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid TESSERACT_DRIFT_SECS '{secs}': {e}"))?;
        config.drift_interval = Duration::from_secs(secs);
    }
    let bind_addr = config.bind_address;

    // Create application state (seeds memory, wires the simulator)
    let state = Arc::new(AppState::with_config(config));
    tracing::info!(
        "Seeded {} memory cells, simulator '{}' ready",
        state.memory.read().await.len(),
        state.backend.name()
    );

    // Start the background drift task
    let drift_state = state.clone();
    tokio::spawn(async move {
        tesseract_node::drift::run_drift(drift_state).await;
    });

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Tesseract node online at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
