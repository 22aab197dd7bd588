//! Storefront web server library.
//!
//! A minimal product-listing server: validate environment configuration,
//! connect to Postgres, fetch up to ten product names, render an HTML page.
//!
//! ```text
//! process env ──▶ config ──▶ db connector ──┐
//!                                            ▼
//!      GET / ──▶ http handler ──▶ PageData ──▶ render ──▶ HTML (200)
//!                      │
//!                      └── connect failed ──▶ degraded page (still 200)
//! ```

// Core subsystems
pub mod config;
pub mod db;
pub mod http;
pub mod render;

// Cross-cutting concerns
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use render::TemplateEngine;
