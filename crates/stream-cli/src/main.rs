//! Livestream read-path operator CLI
//!
//! Run with:
//! ```bash
//! cargo run -p stream-cli -- user-stats alice
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

mod args;
mod commands;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use stream_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use stream_db::{create_pool, run_migrations, DatabaseConfig};
use stream_service::ServiceContext;

use args::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    let mut tracing_config = TracingConfig::for_environment(config.app.env);
    tracing_config.json |= cli.json_logs;
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(env = ?config.app.env, "Configuration loaded");

    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .context("failed to connect to database")?;
    if cli.migrate {
        run_migrations(&pool, &cli.migrations_dir)
            .await
            .context("failed to run migrations")?;
    }

    let ctx = ServiceContext::from_pool(pool, &config)
        .await
        .map_err(AppError::from)?;

    commands::handle(&ctx, cli.command)
        .await
        .map_err(|e| match e.downcast::<stream_service::ServiceError>() {
            Ok(service_error) => {
                let app_error = AppError::from(service_error);
                anyhow::anyhow!("[{}] {app_error}", app_error.error_code())
            }
            Err(other) => other,
        })
}
