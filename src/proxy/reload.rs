//! Proxy reload via the proxy binary.
//!
//! Starts a new proxy process on the assembled config and hands it the pid of
//! the running one (`-sf`) so it finishes in-flight connections and exits.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::config::{PathsConfig, ProxyConfig};
use crate::proxy::ProxyController;

/// Errors raised while reloading the proxy.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The proxy binary could not be started.
    #[error("could not run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    /// The proxy rejected the configuration or failed to start.
    #[error("proxy reload failed (exit code {code:?}): {stderr}")]
    Failed { code: Option<i32>, stderr: String },
}

/// Reloads the proxy by running its binary in daemon mode.
#[derive(Debug, Clone)]
pub struct CommandReloader {
    binary: String,
    config_file: PathBuf,
    pid_file: PathBuf,
}

impl CommandReloader {
    pub fn new(
        binary: impl Into<String>,
        config_file: impl Into<PathBuf>,
        pid_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            binary: binary.into(),
            config_file: config_file.into(),
            pid_file: pid_file.into(),
        }
    }

    pub fn from_config(paths: &PathsConfig, proxy: &ProxyConfig) -> Self {
        Self::new(
            proxy.binary.clone(),
            PathBuf::from(&paths.configs_path).join(&proxy.config_file),
            proxy.pid_file.clone(),
        )
    }

    /// Pid of the running proxy, if the pid file holds one.
    async fn previous_pid(&self) -> Option<u32> {
        let content = tokio::fs::read_to_string(&self.pid_file).await.ok()?;
        content.trim().parse().ok()
    }

    /// Arguments for the reload invocation.
    async fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            self.config_file.display().to_string(),
            "-D".to_string(),
            "-p".to_string(),
            self.pid_file.display().to_string(),
        ];
        if let Some(pid) = self.previous_pid().await {
            args.push("-sf".to_string());
            args.push(pid.to_string());
        }
        args
    }
}

#[async_trait]
impl ProxyController for CommandReloader {
    async fn reload(&self) -> Result<(), ReloadError> {
        let args = self.args().await;
        tracing::info!(binary = %self.binary, args = ?args, "Reloading proxy");

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .await
            .map_err(|source| ReloadError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ReloadError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::info!("Proxy reloaded");
        Ok(())
    }
}
