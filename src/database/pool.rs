use crate::config::Config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database_acquire_timeout_secs,
        ))
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Waits for in-flight connections to be returned, then closes the pool.
pub async fn close_pool(pool: &PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
