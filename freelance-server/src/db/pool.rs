//! Database connection pool management
//!
//! [`Database`] is constructed explicitly at startup and handed to every
//! repository; there is no process-wide connection manager.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::tx::Tx;
use super::DbError;
use crate::config::DatabaseConfig;

/// Pooled database handle with an explicit open/close lifecycle.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a PostgreSQL connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the first connection cannot be established.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let db = Database::open(&config.database).await?;
    /// ```
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "database pool opened"
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Acquire a connection and start a transaction on it.
    ///
    /// The connection goes back to the pool when the returned [`Tx`] is
    /// committed, rolled back or dropped.
    pub async fn begin(&self) -> Result<Tx, DbError> {
        Ok(self.pool.begin().await?)
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
