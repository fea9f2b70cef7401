//! Removal request.

use std::path::PathBuf;

use thiserror::Error;

/// Modes in which service lifecycle and registry membership belong to an
/// external orchestrator.
const EXTERNAL_MODES: [&str; 2] = ["service", "swarm"];

/// Problems with a request, detected before anything is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Everything needed to remove one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    pub service_name: String,
    pub templates_path: PathBuf,
    pub configs_path: PathBuf,
    pub registry_address: String,
    pub instance_name: String,
    pub mode: String,
}

impl RemovalRequest {
    /// Whether this removal must deregister the service itself.
    /// `service` and `swarm` (any case) leave that to the orchestrator.
    pub fn deregisters(&self) -> bool {
        !EXTERNAL_MODES
            .iter()
            .any(|external| self.mode.eq_ignore_ascii_case(external))
    }

    /// Required-field check for the CLI layer. The orchestrator assumes it
    /// has been done.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.service_name.trim().is_empty() {
            return Err(RequestError::Missing("service name"));
        }
        if self.templates_path.as_os_str().is_empty() {
            return Err(RequestError::Missing("templates path"));
        }
        if self.configs_path.as_os_str().is_empty() {
            return Err(RequestError::Missing("configs path"));
        }
        if self.deregisters() {
            if self.registry_address.trim().is_empty() {
                return Err(RequestError::Missing("registry address"));
            }
            if self.instance_name.trim().is_empty() {
                return Err(RequestError::Missing("proxy instance name"));
            }
        }
        Ok(())
    }
}
