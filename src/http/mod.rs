//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing middleware)
//!     → handler.rs (connect, query, render)
//!     → HTML response (200 always)
//! ```

pub mod handler;
pub mod server;

pub use server::{AppState, HttpServer};
