//! Agora API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p agora-api
//! ```
//!
//! Configuration is loaded from environment variables (or a `.env` file).

use agora_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        storage = if config.database.is_some() { "postgres" } else { "memory" },
        "Configuration loaded"
    );

    agora_api::server::run(config).await
}
