//! Observability subsystem.
//!
//! All failures are logged server-side only; the single user-visible
//! signal is the degraded page state.

pub mod logging;

pub use logging::init_logging;
