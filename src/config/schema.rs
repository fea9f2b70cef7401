//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the fleet tool.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the fleet tool.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Template and output directories.
    pub paths: PathsConfig,

    /// Service registry settings.
    pub registry: RegistryConfig,

    /// Proxy process settings (assembly output, reload command).
    pub proxy: ProxyConfig,

    /// Deployment mode (`service` and `swarm` leave registry membership to
    /// the orchestrator running the services).
    pub mode: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            registry: RegistryConfig::default(),
            proxy: ProxyConfig::default(),
            mode: "default".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Filesystem locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the consolidated configuration is written to.
    pub configs_path: String,

    /// Directory holding the base template and per-service fragments.
    pub templates_path: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            configs_path: "/cfg".to_string(),
            templates_path: "/cfg/tmpl".to_string(),
        }
    }
}

/// Service registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry address (e.g., "http://consul:8500").
    pub address: String,

    /// Name of the proxy instance services are registered under.
    pub instance_name: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            instance_name: "docker-flow".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Proxy process configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Proxy executable used for reloads.
    pub binary: String,

    /// Consolidated config file name, relative to `paths.configs_path`.
    pub config_file: String,

    /// Base template file name, relative to `paths.templates_path`.
    pub base_template: String,

    /// Pid file of the running proxy.
    pub pid_file: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            binary: "haproxy".to_string(),
            config_file: "haproxy.cfg".to_string(),
            base_template: "haproxy.tmpl".to_string(),
            pid_file: "/var/run/haproxy.pid".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
