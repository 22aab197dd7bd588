//! Database subsystem.
//!
//! # Data Flow
//! ```text
//! DbConfig
//!     → connect.rs (options, connect + ping)
//!     → products.rs (bounded name query)
//!     → Vec<String> handed to the page model
//! ```
//!
//! # Design Decisions
//! - Each request opens its own connection and drops it on return
//! - A failed connect degrades the page instead of erroring the request
//! - A failed query leaves the page available with an empty item list

pub mod connect;
pub mod products;

pub use connect::{connect, DbError};
pub use products::fetch_product_names;
