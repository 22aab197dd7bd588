//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME)
//!     → validation.rs (required-name checks)
//!     → loader.rs (read into schema)
//!     → AppConfig (validated, immutable)
//!     → shared via AppState to the handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Validation reports every missing variable at once
//! - Startup refuses to bind the listener on any missing value

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::AppConfig;
pub use schema::DbConfig;
pub use schema::ListenerConfig;
