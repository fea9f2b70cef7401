//! Command-line interface.
//!
//! Flags and environment variables override values from the config file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::config::FleetConfig;
use crate::proxy::{CommandReloader, TemplateAssembler};
use crate::registry::{ConsulRegistry, RegistryError};
use crate::remove::{FragmentLock, RemovalOrchestrator, RemovalRequest};

#[derive(Parser, Debug)]
#[command(name = "proxy-fleet")]
#[command(about = "Fleet management for reverse-proxy instances", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, env = "PROXY_FLEET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove a service's configuration and reload the proxy
    Remove(RemoveArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Name of the service to remove (e.g. my-service)
    #[arg(short = 's', long)]
    pub service_name: String,

    /// Path to the configurations directory
    #[arg(short = 'c', long)]
    pub configs_path: Option<String>,

    /// Path to the templates directory
    #[arg(short = 't', long)]
    pub templates_path: Option<String>,

    /// Address of the Consul registry
    #[arg(short = 'a', long, env = "CONSUL_ADDRESS")]
    pub consul_address: Option<String>,

    /// Name of the proxy instance
    #[arg(long, env = "PROXY_INSTANCE_NAME")]
    pub proxy_instance_name: Option<String>,

    /// Deployment mode (service and swarm skip registry deregistration)
    #[arg(long, env = "MODE")]
    pub mode: Option<String>,
}

impl RemoveArgs {
    /// Overlay the flags that were given onto the loaded configuration.
    pub fn apply(&self, config: &mut FleetConfig) {
        if let Some(path) = &self.configs_path {
            config.paths.configs_path = path.clone();
        }
        if let Some(path) = &self.templates_path {
            config.paths.templates_path = path.clone();
        }
        if let Some(address) = &self.consul_address {
            config.registry.address = address.clone();
        }
        if let Some(name) = &self.proxy_instance_name {
            config.registry.instance_name = name.clone();
        }
        if let Some(mode) = &self.mode {
            config.mode = mode.clone();
        }
    }

    /// Build the request from an already overlaid configuration.
    pub fn to_request(&self, config: &FleetConfig) -> RemovalRequest {
        RemovalRequest {
            service_name: self.service_name.clone(),
            templates_path: PathBuf::from(&config.paths.templates_path),
            configs_path: PathBuf::from(&config.paths.configs_path),
            registry_address: config.registry.address.clone(),
            instance_name: config.registry.instance_name.clone(),
            mode: config.mode.clone(),
        }
    }
}

/// Wire the production collaborators.
pub fn build_orchestrator(
    config: &FleetConfig,
    lock: FragmentLock,
) -> Result<RemovalOrchestrator, RegistryError> {
    let registry = ConsulRegistry::from_config(&config.registry)?;
    Ok(RemovalOrchestrator::new(
        lock,
        Arc::new(TemplateAssembler::from_config(&config.proxy)),
        Arc::new(CommandReloader::from_config(&config.paths, &config.proxy)),
        Arc::new(registry),
    ))
}
