//! HTML template engine.
//!
//! # Responsibilities
//! - Load and parse the index template once at startup
//! - Render the per-request page model to HTML
//!
//! # Design Decisions
//! - A missing or malformed template is a typed startup error; requests
//!   never see a half-parsed template

use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Per-request view model handed to the index template.
///
/// Invariant: `items` is empty when `is_available` is false.
#[derive(Debug, Default, Serialize)]
pub struct PageData {
    /// Product names, in query order.
    pub items: Vec<String>,

    /// Whether the database answered this request.
    pub is_available: bool,
}

/// Errors raised while loading or rendering the page template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file could not be read from disk.
    #[error("failed to read template {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Template failed to parse or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Template environment parsed once at startup.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Load and parse the index template from disk.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(path).map_err(|e| RenderError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_source(source)
    }

    fn from_source(source: String) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template_owned("index".to_string(), source)?;
        Ok(Self { env })
    }

    /// Render the index page for the given view model.
    pub fn render(&self, data: &PageData) -> Result<String, RenderError> {
        let template = self.env.get_template("index")?;
        Ok(template.render(data)?)
    }
}
