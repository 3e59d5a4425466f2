//! # Configuration
//!
//! Typed service settings read from the environment.
//!
//! A `.env` file is loaded first when present. Keys are matched
//! case-insensitively, so `SERVER_PORT` sets `server_port`.
//!
//! | key | default |
//! |-----|---------|
//! | `server_host` | `0.0.0.0` |
//! | `server_port` | `8080` |
//! | `storage` | `postgres` (`memory` keeps quotes in process) |
//! | `database_url` | built from the `db_*` keys |
//! | `db_user` / `db_password` | `postgres` / empty |
//! | `db_host` / `db_port` | `localhost` / `5432` |
//! | `db_name` | `freight_quote` |
//! | `db_max_connections` | `5` |
//! | `carrier_api_url` | Frete Rapido simulate endpoint |
//! | `carrier_api_timeout_ms` | `10000` |
//! | `metrics_default_last_quotes` | `10` |

use crate::infrastructure::carrier_api::FreteRapidoConfig;
use crate::infrastructure::carrier_api::frete_rapido::DEFAULT_API_URL;
use ::config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Error raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A value is missing or has the wrong type.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ::config::ConfigError),
}

/// Where quotes are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via sqlx.
    Postgres,
    /// Process memory; lost on restart.
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Listen address.
    pub server_host: String,
    /// Listen port.
    pub server_port: u16,
    /// Storage backend.
    pub storage: StorageBackend,
    /// Full connection string; overrides the `db_*` keys.
    pub database_url: Option<String>,
    /// Database user.
    pub db_user: String,
    /// Database password.
    pub db_password: String,
    /// Database host.
    pub db_host: String,
    /// Database port.
    pub db_port: u16,
    /// Database name.
    pub db_name: String,
    /// Pool size.
    pub db_max_connections: u32,
    /// Carrier simulation endpoint.
    pub carrier_api_url: String,
    /// Carrier API timeout in milliseconds.
    pub carrier_api_timeout_ms: u64,
    /// Window used by `GET /metrics` when `last_quotes` is unusable.
    pub metrics_default_last_quotes: usize,
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Invalid` if a value cannot be parsed.
    pub fn load() -> Result<Self, SettingsError> {
        // A missing .env file is normal outside development.
        let _ = dotenvy::dotenv();
        Self::from_environment(Environment::default())
    }

    /// Reads settings from an explicit key/value map instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Invalid` if a value cannot be parsed.
    pub fn from_map(values: HashMap<String, String>) -> Result<Self, SettingsError> {
        Self::from_environment(Environment::default().source(Some(values)))
    }

    fn from_environment(environment: Environment) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8080_i64)?
            .set_default("storage", "postgres")?
            .set_default("db_user", "postgres")?
            .set_default("db_password", "")?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_name", "freight_quote")?
            .set_default("db_max_connections", 5_i64)?
            .set_default("carrier_api_url", DEFAULT_API_URL)?
            .set_default("carrier_api_timeout_ms", 10_000_i64)?
            .set_default("metrics_default_last_quotes", 10_i64)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Returns `database_url`, or a URL assembled from the `db_*` keys.
    #[must_use]
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
            ),
        }
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Returns the carrier client settings.
    #[must_use]
    pub fn carrier_api(&self) -> FreteRapidoConfig {
        FreteRapidoConfig::new(self.carrier_api_url.clone()).with_timeout_ms(self.carrier_api_timeout_ms)
    }
}
