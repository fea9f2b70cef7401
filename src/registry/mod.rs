//! Service registry subsystem.
//!
//! # Data Flow
//! ```text
//! removal (non-swarm modes)
//!     → RegistryClient::deregister(address, service, instance)
//!     → consul.rs: DELETE {address}/v1/kv/{instance}/{service}?recurse
//! ```
//!
//! # Design Decisions
//! - No retries here; callers decide what a failed deregistration means
//! - Request timeout lives in the HTTP client

pub mod consul;

use async_trait::async_trait;
use thiserror::Error;

pub use consul::ConsulRegistry;

/// Errors that can occur while talking to the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The configured address cannot be turned into a request URL.
    #[error("invalid registry address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The HTTP client could not be built.
    #[error("could not build registry client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection failure or timeout.
    #[error("registry request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The registry answered with a non-success status.
    #[error("registry returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Removes service instances from a shared registry.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn deregister(
        &self,
        address: &str,
        service_name: &str,
        instance_name: &str,
    ) -> Result<(), RegistryError>;
}
