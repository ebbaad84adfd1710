//! `WeightBot` Server - Main Entry Point
//!
//! LINE webhook backend that records body-weight messages to DynamoDB.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use wb_server::{api, config, line, store};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wb_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting WeightBot Server"
    );

    if !config.has_signature_verification() {
        warn!("CHANNEL_SECRET not set; webhook signature verification is disabled");
    }

    // Initialize measurement storage
    let dynamo = store::DynamoStore::new(&config);
    dynamo.health_check().await?;
    info!(table = %config.weight_table, "Measurement table reachable");

    // Initialize the LINE reply client
    let line_client = line::LineClient::new(&config)?;

    // Build application state
    let state = api::AppState::new(Arc::new(dynamo), Arc::new(line_client), config.clone());

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
