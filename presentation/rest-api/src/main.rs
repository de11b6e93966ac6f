use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{
    app_config::AppConfig,
    logging_config::{self, LoggingConfig},
    storage_config,
};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: Application configuration (server, CORS, storage, logging)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing: RUST_LOG console output plus the audit file
    logging_config::init_tracing(&LoggingConfig::from_env())?;

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize storage
    let repository = storage_config::init_repository(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(repository);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
