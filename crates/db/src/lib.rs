//! Persistence layer for the watchlist service.
//!
//! Owns the connection pool, the embedded migrations, the row models and
//! the repositories that run SQL against PostgreSQL.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection settings for the PostgreSQL pool.
///
/// When `url` is set it is used as-is; otherwise the DSN is assembled from
/// the individual parts with TLS disabled.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            name: "watchlist".to_string(),
            max_connections: 20,
            acquire_timeout_secs: 5,
        }
    }
}

impl DbConfig {
    /// Build connect options from either the URL or the individual parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable))
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }
}

/// Create a connection pool and open its first connection.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    config
        .pool_options()
        .connect_with(config.connect_options()?)
        .await
}

/// Create a pool that connects on first use.
pub fn create_lazy_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    Ok(config.pool_options().connect_lazy_with(config.connect_options()?))
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
