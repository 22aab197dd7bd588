//! Database connection setup.
//!
//! # Responsibilities
//! - Build Postgres connection options from configuration
//! - Open a single connection and verify it with a ping
//!
//! # Design Decisions
//! - One connection per request, no shared pool
//! - TLS stays disabled, matching the fixed `sslmode=disable` contract
//! - Connect failure is recoverable by the caller (degraded page)

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};
use thiserror::Error;

use crate::config::DbConfig;

/// Errors that can occur while talking to the database.
#[derive(Debug, Error)]
pub enum DbError {
    /// `DB_PORT` is not a valid TCP port number.
    #[error("invalid database port {0:?}")]
    InvalidPort(String),

    /// Connection, liveness check, or query failed.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Build connection options from config.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, DbError> {
    let port: u16 = config
        .port
        .parse()
        .map_err(|_| DbError::InvalidPort(config.port.clone()))?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(PgSslMode::Disable))
}

/// Open a single connection and verify it with a ping.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, DbError> {
    let options = connect_options(config)?;
    let mut conn = PgConnection::connect_with(&options).await?;
    conn.ping().await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DbConfig {
        DbConfig {
            host: "db.internal".to_string(),
            port: "5433".to_string(),
            user: "shop".to_string(),
            password: "secret".to_string(),
            name: "products".to_string(),
        }
    }

    #[test]
    fn test_options_from_config() {
        let options = connect_options(&config()).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "shop");
        assert_eq!(options.get_database(), Some("products"));
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        let mut bad = config();
        bad.port = "fivefourthreetwo".to_string();
        match connect_options(&bad) {
            Err(DbError::InvalidPort(port)) => assert_eq!(port, "fivefourthreetwo"),
            other => panic!("expected InvalidPort, got {other:?}"),
        }
    }
}
