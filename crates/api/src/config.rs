use axum::http::HeaderValue;
use watchlist_db::DbConfig;

/// Runtime mode. Only `production` changes behaviour (5xx message masking,
/// quieter default logging); every other value is treated as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables (or a `.env` file loaded at startup).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Runtime mode (default: development).
    pub environment: Environment,
    /// Bind host (default: `localhost`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ALLOW_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `10`).
    pub shutdown_timeout_secs: u64,
    pub log_format: LogFormat,
    pub database: DbConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: "localhost".to_string(),
            port: 8080,
            cors_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 30,
            shutdown_timeout_secs: 10,
            log_format: LogFormat::Pretty,
            database: DbConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `APP_ENVIRONMENT`               | `development`           |
    /// | `HOST`                          | `localhost`             |
    /// | `PORT`                          | `8080`                  |
    /// | `CORS_ALLOW_ORIGINS`            | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`         | `10`                    |
    /// | `LOG_FORMAT`                    | `pretty` (or `json`)    |
    /// | `DATABASE_URL`                  | unset                   |
    /// | `DATABASE_HOST`                 | `localhost`             |
    /// | `DATABASE_PORT`                 | `5432`                  |
    /// | `DATABASE_USER`                 | `postgres`              |
    /// | `DATABASE_PASSWORD`             | empty                   |
    /// | `DATABASE_NAME`                 | `watchlist`             |
    /// | `DATABASE_MAX_CONNECTIONS`      | `20`                    |
    /// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let db_defaults = DbConfig::default();
        let string_or = |key: &str, default: String| lookup(key).unwrap_or(default);

        let environment = lookup("APP_ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or(defaults.environment);

        let cors_origins = match lookup("CORS_ALLOW_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_origins,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let database = DbConfig {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: string_or("DATABASE_HOST", db_defaults.host),
            port: parse_var(&lookup, "DATABASE_PORT", "u16", db_defaults.port)?,
            user: string_or("DATABASE_USER", db_defaults.user),
            password: string_or("DATABASE_PASSWORD", db_defaults.password),
            name: string_or("DATABASE_NAME", db_defaults.name),
            max_connections: parse_var(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                "u32",
                db_defaults.max_connections,
            )?,
            acquire_timeout_secs: parse_var(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                "u64",
                db_defaults.acquire_timeout_secs,
            )?,
        };

        Ok(Self {
            environment,
            host: string_or("HOST", defaults.host),
            port: parse_var(&lookup, "PORT", "u16", defaults.port)?,
            cors_origins,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                "u64",
                defaults.request_timeout_secs,
            )?,
            shutdown_timeout_secs: parse_var(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                "u64",
                defaults.shutdown_timeout_secs,
            )?,
            log_format,
            database,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map(|_| origin.to_string())
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect()
}
