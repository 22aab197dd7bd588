//! Storefront server binary.
//!
//! Startup order matters: environment validation happens before the
//! template parse, and both happen before the listener binds. A request
//! only ever sees a fully-validated configuration and a parsed template.

use std::path::Path;
use std::process::ExitCode;

use tokio::net::TcpListener;

use storefront::config::{AppConfig, ConfigError};
use storefront::observability::init_logging;
use storefront::{HttpServer, TemplateEngine};

const TEMPLATE_PATH: &str = "templates/index.html";

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    // Validate environment before doing anything else.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingEnv(missing)) => {
            println!("ERROR: Application failed to start.");
            println!(
                "The following environment variables are missing: {}",
                missing.join(", ")
            );
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        db_host = %config.db.host,
        db_name = %config.db.name,
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    let templates = match TemplateEngine::load(Path::new(TEMPLATE_PATH)) {
        Ok(templates) => templates,
        Err(e) => {
            tracing::error!(error = %e, path = TEMPLATE_PATH, "Failed to load template");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                error = %e,
                address = %config.listener.bind_address,
                "Failed to bind listener"
            );
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Server successfully started on {}...",
        config.listener.bind_address
    );

    let server = HttpServer::new(config, templates);
    if let Err(e) = server.run(listener).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
