//! Records server configuration

use std::str::FromStr;

use shared::error::AppError;
use sqlx::postgres::PgConnectOptions;

/// Records server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// PostgreSQL host
    pub db_host: String,
    /// PostgreSQL port
    pub db_port: u16,
    /// PostgreSQL user
    pub db_user: String,
    /// PostgreSQL password
    pub db_password: String,
    /// Database name
    pub db_name: String,
    /// Connection pool maximum size
    pub db_pool_max: u32,
    /// HTTP listen port
    pub http_port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());

        Ok(Self {
            db_host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            db_port: parse_or(&lookup, "DB_PORT", 5432)?,
            db_user: lookup("DB_USER").unwrap_or_else(|| "postgres".into()),
            db_password: require_secret(&lookup, "DB_PASSWORD", &environment)?,
            db_name: lookup("DB_NAME").unwrap_or_else(|| "records".into()),
            db_pool_max: parse_or(&lookup, "DB_POOL_MAX", 10)?,
            http_port: parse_or(&lookup, "HTTP_PORT", 8080)?,
            environment,
        })
    }

    /// PostgreSQL connection options built from the individual settings
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

/// Numeric variable: unset falls back to `default`, garbage is an error.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a number, got {raw:?}"))),
        None => Ok(default),
    }
}

/// Secret variable: must be set and non-empty outside development.
fn require_secret<F>(lookup: &F, name: &str, environment: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let val = lookup(name).unwrap_or_default();
    if val.is_empty() && environment != "development" {
        return Err(AppError::config(format!(
            "{name} must be set in {environment} environment"
        )));
    }
    Ok(val)
}
