//! Product queries.

use sqlx::{PgConnection, Row};

use crate::db::connect::DbError;

/// The one query the server runs. The LIMIT bounds the page size; there is
/// no pagination.
const PRODUCT_QUERY: &str = "SELECT name FROM products LIMIT 10";

/// Fetch up to ten product names, in query order.
///
/// A row whose `name` column fails to decode is skipped rather than
/// failing the whole page.
pub async fn fetch_product_names(conn: &mut PgConnection) -> Result<Vec<String>, DbError> {
    let rows = sqlx::query(PRODUCT_QUERY).fetch_all(conn).await?;

    Ok(rows
        .iter()
        .filter_map(|row| match row.try_get::<String, _>("name") {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping product row that failed to decode");
                None
            }
        })
        .collect())
}
