//! Database connection management

pub mod schema;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;

/// PostgreSQL database connection pool
///
/// Owned by the process entry point and handed to the order store at
/// construction. Connections are checked out per query and returned on drop.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let mut options = PgConnectOptions::from_str(&config.url)?;
        if config.statement_timeout_ms > 0 {
            options = options.options([(
                "statement_timeout",
                config.statement_timeout_ms.to_string(),
            )]);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "PostgreSQL connection pool established"
        );
        Ok(Self { pool })
    }

    /// Connect with default pool settings
    pub async fn connect_url(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::connect(&DatabaseConfig {
            url: database_url.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create the `orders` table if it does not exist yet
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        schema::init_schema(&self.pool).await
    }
}
