use anyhow::Context;
use listings_api::config::Config;
use listings_api::constants::API_NAME;
use listings_api::handlers::{self, AppState};
use listings_api::repository;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Listings API on port {}", API_NAME, config.server_port);

    let pool = repository::connect(&config)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        "{} Connected to database (max {} connections)",
        API_NAME,
        config.database_max_connections
    );

    let app = handlers::router(AppState::new(pool.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("{} Server stopped", API_NAME);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
}
