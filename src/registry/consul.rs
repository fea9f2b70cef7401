//! Consul KV registry client.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::RegistryConfig;
use crate::registry::{RegistryClient, RegistryError};

/// Registry client backed by Consul's KV store.
///
/// Services are stored under `{instance}/{service}/...`; deregistration
/// deletes that whole prefix.
#[derive(Debug, Clone)]
pub struct ConsulRegistry {
    client: reqwest::Client,
}

impl ConsulRegistry {
    pub fn new(timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RegistryError::Client)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        Self::new(Duration::from_secs(config.timeout_secs))
    }
}

/// KV URL for a service: `{address}/v1/kv/{instance}/{service}?recurse`.
/// Addresses without a scheme are treated as plain HTTP.
pub fn service_url(
    address: &str,
    instance_name: &str,
    service_name: &str,
) -> Result<Url, RegistryError> {
    let invalid = |reason: String| RegistryError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let address = address.trim();
    let base = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    };

    let mut url = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(["v1", "kv", instance_name, service_name]);
    url.set_query(Some("recurse"));
    Ok(url)
}

#[async_trait]
impl RegistryClient for ConsulRegistry {
    async fn deregister(
        &self,
        address: &str,
        service_name: &str,
        instance_name: &str,
    ) -> Result<(), RegistryError> {
        let url = service_url(address, instance_name, service_name)?;
        tracing::debug!(url = %url, "Deregistering service");

        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .map_err(|source| RegistryError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                url: url.to_string(),
                status,
            });
        }

        tracing::info!(service = %service_name, instance = %instance_name, "Service deregistered");
        Ok(())
    }
}
