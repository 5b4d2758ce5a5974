//! Postgres connection management and the shared store client.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Errors from store operations, split by failure phase so the driver loop
/// can log which stage of a tick went down.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Postgres connection error: {0}")]
    Connection(String),

    #[error("Postgres not ready: {0}")]
    Liveness(String),

    #[error("Postgres query error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "analytics".to_string(),
            user: "app".to_string(),
            password: "app_pass".to_string(),
            // The driver loop is the only writer and owns its session.
            max_connections: 1,
        }
    }
}

impl StoreConfig {
    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

/// Postgres store client wrapping a connection pool.
///
/// Clone is cheap (inner Arc). All event-stream operations live in the
/// [`crate::events`] module.
#[derive(Clone)]
pub struct StoreClient {
    pool: PgPool,
}

impl StoreClient {
    /// Connect to Postgres with the given configuration.
    ///
    /// A single attempt: callers decide whether and how often to retry.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connected to Postgres"
        );
        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool for direct operations.
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }

    /// Trivial liveness query, distinguishing "session accepted" from
    /// "store actually serving queries".
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Liveness(e.to_string()))?;
        Ok(())
    }

    /// Tear down the pool. The session is presumed dead by the time this is
    /// called, so there is nothing useful to report.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
