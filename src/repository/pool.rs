use crate::config::Config;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Parses the connection string and applies the configured TLS mode on top.
pub fn connect_options(config: &Config) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.database_url)?;
    Ok(match config.database_ssl_mode {
        Some(mode) => options.ssl_mode(mode),
        None => options,
    })
}

pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
}

/// Every query checks out one connection and hands it back when dropped,
/// whether the query succeeded or not.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    pool_options(config)
        .connect_with(connect_options(config)?)
        .await
}
