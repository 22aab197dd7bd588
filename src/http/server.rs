//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the index handler
//! - Wire up request tracing middleware
//! - Bind the server to a listener

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handler::index;
use crate::render::TemplateEngine;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub templates: Arc<TemplateEngine>,
}

/// HTTP server for the storefront page.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and parsed
    /// template.
    pub fn new(config: AppConfig, templates: TemplateEngine) -> Self {
        let state = AppState {
            config: Arc::new(config),
            templates: Arc::new(templates),
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with its middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
