//! Page rendering subsystem.

pub mod engine;

pub use engine::{PageData, RenderError, TemplateEngine};
