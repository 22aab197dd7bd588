//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! Values are sourced from the process environment by the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the storefront server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Database connection settings.
    pub db: DbConfig,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,
}

/// Database connection settings.
///
/// All fields mirror the `DB_*` environment variables verbatim; the port
/// stays a string until the connector parses it.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DbConfig {
    /// Database server hostname (`DB_HOST`).
    pub host: String,

    /// Database server port (`DB_PORT`).
    pub port: String,

    /// Login role (`DB_USER`).
    pub user: String,

    /// Login password (`DB_PASSWORD`).
    pub password: String,

    /// Database name (`DB_NAME`).
    pub name: String,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}
