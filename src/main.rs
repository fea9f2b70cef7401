//! proxy-fleet
//!
//! Manages the configuration of a reverse-proxy instance.
//!
//! # Removal Flow
//!
//! ```text
//!   CLI flags / env ──┐
//!   config file ──────┴─▶ FleetConfig ─▶ RemovalRequest
//!                                             │
//!                                             ▼
//!                                  ┌─────────────────────┐
//!                                  │ RemovalOrchestrator │
//!                                  └──────────┬──────────┘
//!          ┌──────────────────┬───────────────┼──────────────────┐
//!          ▼                  ▼               ▼                  ▼
//!   delete fragments     deregister      assemble config     reload proxy
//!   (FragmentLock)       (Consul KV)     (templates dir)     (proxy binary)
//! ```

use std::process::ExitCode;

use clap::Parser;

use proxy_fleet::cli::{build_orchestrator, Cli, Commands};
use proxy_fleet::config::loader::ConfigError;
use proxy_fleet::config::validation::validate_config;
use proxy_fleet::config::{load_config, FleetConfig};
use proxy_fleet::observability::logging;
use proxy_fleet::remove::FragmentLock;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FleetConfig::default(),
    };

    match cli.command {
        Commands::Remove(args) => {
            args.apply(&mut config);
            validate_config(&config).map_err(ConfigError::Validation)?;
            logging::init(&config.observability);

            tracing::debug!(
                templates_path = %config.paths.templates_path,
                configs_path = %config.paths.configs_path,
                mode = %config.mode,
                "Configuration loaded"
            );

            let request = args.to_request(&config);
            request.validate()?;

            let orchestrator = build_orchestrator(&config, FragmentLock::new())?;
            orchestrator.remove(&request).await?;
        }
    }

    Ok(())
}
