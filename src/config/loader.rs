//! Configuration loading from the process environment.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

use crate::config::schema::{AppConfig, DbConfig, ListenerConfig};
use crate::config::validation::{missing_vars, REQUIRED_VARS};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset or empty.
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails with every missing variable named at once, so a broken
    /// deployment can be fixed in a single pass.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Single snapshot: validation and loading see the same values.
        let vars: HashMap<String, String> = REQUIRED_VARS
            .iter()
            .filter_map(|name| env::var(name).ok().map(|value| ((*name).to_string(), value)))
            .collect();
        Self::from_snapshot(&vars)
    }

    fn from_snapshot(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let missing = missing_vars(|name| vars.get(name).cloned());
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        let get = |name: &str| vars.get(name).cloned().unwrap_or_default();

        Ok(Self {
            db: DbConfig {
                host: get("DB_HOST"),
                port: get("DB_PORT"),
                user: get("DB_USER"),
                password: get("DB_PASSWORD"),
                name: get("DB_NAME"),
            },
            listener: ListenerConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_loads_the_values_it_validated() {
        let vars = snapshot(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "5432"),
            ("DB_USER", "shop"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "products"),
        ]);
        let config = AppConfig::from_snapshot(&vars).unwrap();
        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.port, "5432");
        assert_eq!(config.db.user, "shop");
        assert_eq!(config.db.password, "secret");
        assert_eq!(config.db.name, "products");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_values_fail_the_load() {
        let vars = snapshot(&[("DB_HOST", "db.internal"), ("DB_PORT", "5432")]);
        match AppConfig::from_snapshot(&vars) {
            Err(ConfigError::MissingEnv(missing)) => {
                assert_eq!(missing, vec!["DB_USER", "DB_PASSWORD", "DB_NAME"]);
            }
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }
}
