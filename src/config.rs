//! # Store Configuration
//!
//! Connection settings for the document store and the key-value cache.
//! The application's entry point builds a [`ClientsConfig`] once and hands
//! each facade its own section.
//!
//! Only the document store reads the environment (`DB_HOST`, `DB_PORT`,
//! `DB_DATABASE`, `DB_SERVER_SELECTION_TIMEOUT_MS`). The cache targets the
//! driver's default local endpoint.

use crate::error::Result;
use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;

const ENV_PREFIX: &str = "DB";

/// MongoDB connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Upper bound the driver waits for a reachable server per operation
    pub server_selection_timeout_ms: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            database: "files_manager".to_string(),
            server_selection_timeout_ms: 30_000,
        }
    }
}

impl DbConfig {
    /// Load from `DB_*` process environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit environment source
    pub fn from_environment(environment: Environment) -> Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database", defaults.database)?
            .set_default(
                "server_selection_timeout_ms",
                defaults.server_selection_timeout_ms as i64,
            )?
            .add_source(environment.try_parsing(true).ignore_empty(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Connection URI in the `mongodb://host:port/database` form
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}/{}", self.host, self.port, self.database)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(self.server_selection_timeout_ms)
    }
}

/// Redis connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedisConfig {
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
        }
    }
}

/// Configuration for every store client the application uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientsConfig {
    pub database: DbConfig,
    pub redis: RedisConfig,
}

impl ClientsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database: DbConfig::from_env()?,
            redis: RedisConfig::default(),
        })
    }
}
