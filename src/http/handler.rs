//! Index page handler.
//!
//! The one route the server exposes. Per-request control flow: attempt a
//! database connection; on failure serve the degraded page, on success run
//! the bounded product query and render the result.

use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::db;
use crate::http::server::AppState;
use crate::render::PageData;

/// Handle `GET /`.
///
/// Always responds 200; database failure shows as the degraded page,
/// never as an HTTP error status.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut data = PageData::default();

    // The connection is dropped when this handler returns.
    match db::connect(&state.config.db).await {
        Ok(mut conn) => {
            data.is_available = true;
            match db::fetch_product_names(&mut conn).await {
                Ok(items) => data.items = items,
                Err(e) => {
                    // Page stays available: the query failed, not the database.
                    tracing::error!(error = %e, "Product query failed");
                }
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed");
        }
    }

    match state.templates.render(&data) {
        Ok(body) => Html(body),
        Err(e) => {
            tracing::error!(error = %e, "Template render failed");
            Html(String::new())
        }
    }
}
