//! Database pool setup

use std::time::Duration;

use anyhow::Result;
use imgdrop_core::config::DbConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build the shared connection pool.
pub async fn connect_pool(config: &DbConfig) -> Result<PgPool> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connected successfully"
    );

    Ok(pool)
}
