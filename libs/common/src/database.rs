//! Database module for handling MySQL connections and operations
//!
//! This module provides connection pooling, configuration, and the startup
//! liveness probe for the MySQL database.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::env;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MAX_LIFETIME: Duration = Duration::from_secs(180);
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: u32 = 12;
const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database server hostname
    pub host: String,
    /// Database server port
    pub port: u16,
    /// Username for authentication
    pub username: String,
    /// Password for authentication
    pub password: String,
    /// Name of the database to use
    pub database: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Maximum lifetime of a pooled connection before it is recycled
    pub max_lifetime: Duration,
    /// How long a caller may wait for a pool slot
    pub acquire_timeout: Duration,
    /// Maximum number of liveness probes at startup
    pub max_retries: u32,
    /// Pause between failed liveness probes
    pub retry_interval: Duration,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DB_HOST`: Database server hostname (required)
    /// - `DB_PORT`: Database server port (required)
    /// - `MYSQL_USER`: Username for authentication (required)
    /// - `MYSQL_PASSWORD`: Password for authentication (required)
    /// - `MYSQL_DATABASE`: Name of the database to use (required)
    ///
    /// All five variables must be set and non-empty; there are no defaults.
    pub fn from_env() -> DatabaseResult<Self> {
        let host = required_var("DB_HOST")?;
        let port = required_var("DB_PORT")?;
        let username = required_var("MYSQL_USER")?;
        let password = required_var("MYSQL_PASSWORD")?;
        let database = required_var("MYSQL_DATABASE")?;

        let port = port.parse::<u16>().map_err(|_| {
            DatabaseError::Configuration(format!("DB_PORT is not a valid port number: {port:?}"))
        })?;

        Ok(Self {
            host,
            port,
            username,
            password,
            database,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_lifetime: DEFAULT_MAX_LIFETIME,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        })
    }

    /// Build the sqlx connection options for this configuration
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

fn required_var(name: &str) -> DatabaseResult<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(DatabaseError::Configuration(format!(
            "{name} must be set and non-empty"
        ))),
    }
}

/// Initialize a MySQL connection pool
///
/// The pool is opened lazily: no connection is made until the first
/// acquisition, so this performs no I/O. Use [`wait_until_ready`] to verify
/// connectivity before serving traffic.
pub fn init_pool(config: &DatabaseConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(config.max_lifetime)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - MySQL connection pool
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if connection is successful, false otherwise
pub async fn health_check(pool: &MySqlPool) -> DatabaseResult<bool> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(DatabaseError::Query)?;

    Ok(true)
}

/// Probe the database until it answers or the retry budget runs out
///
/// Issues a `SELECT 1` through the pool up to `config.max_retries` times,
/// pausing `config.retry_interval` after each failed probe. Returns on the
/// first success; exhausting the budget yields
/// [`DatabaseError::Unreachable`] carrying the last probe error.
pub async fn wait_until_ready(pool: &MySqlPool, config: &DatabaseConfig) -> DatabaseResult<()> {
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        let err = match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => {
                info!("Successfully connected to MySQL");
                return Ok(());
            }
            Err(err) => err,
        };

        warn!(
            "Database ping failed (attempt {}/{}): {}. Retrying in {:?}",
            attempt, config.max_retries, err, config.retry_interval
        );
        sleep(config.retry_interval).await;

        if attempt >= config.max_retries {
            return Err(DatabaseError::Unreachable {
                attempts: attempt,
                source: err,
            });
        }
    }
}

/// Open the pool and block until the database is reachable
///
/// This is the single startup entry point: it never runs concurrently and is
/// never repeated during normal operation. A failure here means the process
/// must not begin serving requests.
pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<MySqlPool> {
    info!(
        "Attempting to connect to {}@{}:{}/{}",
        config.username, config.host, config.port, config.database
    );

    let pool = init_pool(config);
    wait_until_ready(&pool, config).await?;

    Ok(pool)
}
