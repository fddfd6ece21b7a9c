/// PostgreSQL connection pool
///
/// [`create_pool`] connects eagerly and runs a health check, so a bad
/// `DATABASE_URL` fails at startup rather than on the first request.
/// [`connect_lazy`] builds the same pool without touching the network, which
/// the router tests rely on.
///
/// # Example
///
/// ```no_run
/// use careerflow_shared::db::pool::{create_pool, DatabaseConfig, PoolStats};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = create_pool(DatabaseConfig::new("postgres://careerflow@localhost/careerflow")).await?;
/// let stats = PoolStats::of(&pool);
/// assert!(stats.total_connections >= stats.idle_connections);
/// # Ok(())
/// # }
/// ```

use serde::Serialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    pub max_connections: u32,

    /// Idle connections kept warm
    pub min_connections: u32,

    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,

    /// Idle connections older than this are closed; None keeps them
    pub idle_timeout: Option<Duration>,

    /// Connections are recycled after this age; None keeps them forever
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl DatabaseConfig {
    /// Default settings for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = self.min_connections.min(max_connections);
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

/// Connects and verifies the database answers
///
/// # Errors
///
/// Returns an error if the URL is invalid, the server is unreachable or the
/// health check fails.
pub async fn create_pool(config: DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
        "Creating database connection pool"
    );

    let pool = config.pool_options().connect(&config.url).await?;

    health_check(&pool).await?;

    info!("Database connection pool ready");
    Ok(pool)
}

/// Builds a pool that opens connections on first use
///
/// Only fails when the URL cannot be parsed.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    config.pool_options().connect_lazy(&config.url)
}

/// Runs `SELECT 1` against the pool
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    let (value,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if value != 1 {
        warn!(value, "Database health check returned unexpected value");
        return Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ));
    }

    debug!("Database health check passed");
    Ok(())
}

/// Snapshot of pool usage, reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub active_connections: u32,
    pub idle_connections: u32,
    pub total_connections: u32,
}

impl PoolStats {
    pub fn of(pool: &PgPool) -> Self {
        let total = pool.size();
        let idle = pool.num_idle() as u32;

        Self {
            active_connections: total.saturating_sub(idle),
            idle_connections: idle,
            total_connections: total,
        }
    }
}

/// Closes every connection; call once during shutdown
pub async fn close_pool(pool: PgPool) {
    info!("Closing database connection pool");
    pool.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.idle_timeout, Some(Duration::from_secs(600)));
        assert_eq!(config.max_lifetime, Some(Duration::from_secs(1800)));
    }

    #[test]
    fn test_with_max_connections_caps_minimum() {
        let config = DatabaseConfig::new("postgres://localhost/careerflow").with_max_connections(0);
        assert_eq!(config.max_connections, 0);
        assert_eq!(config.min_connections, 0);

        let config = DatabaseConfig::new("postgres://localhost/careerflow").with_max_connections(25);
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.min_connections, 1);
    }

    #[tokio::test]
    async fn test_connect_lazy_does_not_touch_network() {
        let config = DatabaseConfig::new("postgres://nobody@127.0.0.1:1/none");
        let pool = connect_lazy(&config).expect("lazy pool should build");

        let stats = PoolStats::of(&pool);
        assert_eq!(stats.total_connections, 0);
        assert_eq!(stats.active_connections, 0);
    }

    #[test]
    fn test_connect_lazy_rejects_bad_url() {
        let config = DatabaseConfig::new("not a url");
        assert!(connect_lazy(&config).is_err());
    }
}
