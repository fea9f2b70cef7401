//! Removal orchestration.
//!
//! # Responsibilities
//! - Delete a service's fragments under the fragment lock
//! - Deregister the service unless the deployment mode owns registration
//! - Reassemble the proxy configuration and reload the proxy
//!
//! # Design Decisions
//! - Linear pipeline, first error wins, nothing is retried or rolled back
//! - Every failure is logged here before it is returned

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::proxy::fragment::fragment_paths;
use crate::proxy::{AssemblyError, ConfigAssembler, ProxyController, ReloadError};
use crate::registry::{RegistryClient, RegistryError};
use crate::remove::{Filesystem, FragmentLock, LocalFilesystem, RemovalRequest};

/// Errors that abort a removal.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// A fragment could not be deleted.
    #[error(transparent)]
    Filesystem(io::Error),

    /// The registry refused or could not be reached.
    #[error("could not remove the service from the registry\n{0}")]
    Registry(#[source] RegistryError),

    /// The consolidated configuration could not be rebuilt.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// The proxy did not reload.
    #[error(transparent)]
    Reload(#[from] ReloadError),
}

/// Runs the removal sequence against injected collaborators.
///
/// Holds no per-request state; one instance can serve many removals.
pub struct RemovalOrchestrator {
    lock: FragmentLock,
    filesystem: Arc<dyn Filesystem>,
    assembler: Arc<dyn ConfigAssembler>,
    proxy: Arc<dyn ProxyController>,
    registry: Arc<dyn RegistryClient>,
}

impl RemovalOrchestrator {
    /// Create an orchestrator that deletes fragments from the local disk.
    pub fn new(
        lock: FragmentLock,
        assembler: Arc<dyn ConfigAssembler>,
        proxy: Arc<dyn ProxyController>,
        registry: Arc<dyn RegistryClient>,
    ) -> Self {
        Self {
            lock,
            filesystem: Arc::new(LocalFilesystem),
            assembler,
            proxy,
            registry,
        }
    }

    /// Replace the filesystem used for fragment deletion.
    pub fn with_filesystem(mut self, filesystem: Arc<dyn Filesystem>) -> Self {
        self.filesystem = filesystem;
        self
    }

    /// Remove a service from the proxy.
    pub async fn remove(&self, request: &RemovalRequest) -> Result<(), RemoveError> {
        tracing::info!(service = %request.service_name, "Removing service configuration");

        let result = self.run(request).await;
        if let Err(e) = &result {
            tracing::error!(service = %request.service_name, error = %e, "Service removal failed");
        }
        result
    }

    async fn run(&self, request: &RemovalRequest) -> Result<(), RemoveError> {
        self.remove_fragments(request).await?;

        self.assembler
            .assemble(&request.templates_path, &request.configs_path)
            .await?;

        self.proxy.reload().await?;

        tracing::info!(service = %request.service_name, "Service removed");
        Ok(())
    }

    /// Fragment deletion and deregistration, under the fragment lock.
    async fn remove_fragments(&self, request: &RemovalRequest) -> Result<(), RemoveError> {
        tracing::info!(service = %request.service_name, "Removing configuration files");

        let _guard = self.lock.acquire().await;

        for path in fragment_paths(&request.templates_path, &request.service_name) {
            self.filesystem.remove(&path).await.map_err(|e| {
                tracing::debug!(path = %path.display(), error = %e, "Fragment deletion failed");
                RemoveError::Filesystem(e)
            })?;
            tracing::debug!(path = %path.display(), "Fragment removed");
        }

        if request.deregisters() {
            self.registry
                .deregister(
                    &request.registry_address,
                    &request.service_name,
                    &request.instance_name,
                )
                .await
                .map_err(RemoveError::Registry)?;
        } else {
            tracing::debug!(mode = %request.mode, "Registry membership managed externally");
        }

        Ok(())
    }
}
