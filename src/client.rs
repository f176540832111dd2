//! High-level client for the NetLens API
//!
//! [`Client`] is the public entry point. It owns the sanitized candidate
//! list and a single [`HttpExecutor`], and exposes one method per API
//! operation. Each operation joins its fixed endpoint path onto every
//! candidate base URL, walks the candidates with fallback, gates the
//! committed payload through its structural validator, and only then
//! converts it to the typed response.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, MAX_TIMEOUT_MS};
use crate::http::HttpExecutor;
use crate::types::{IpDetailsResponse, IpResponse, SdkVersionsResponse};
use crate::url::{build_url, sanitize_base_url};
use crate::validate;
use crate::{Error, Result};

const IP_PATH: &str = "/api/v1/ip";
const IP_DETAILS_PATH: &str = "/api/v1/ip/details";
const SDK_VERSION_PATH: &str = "/api/v1/sdk/version";

/// Client for the NetLens API
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Examples
/// ```
/// use netlens_client::{Client, ClientConfig};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new(ClientConfig::new())?;
///
///     let ip = client.get_ip().await?;
///     println!("{} resolves to {}", ip.ip, ip.country);
///
///     let versions = client.get_sdk_versions().await?;
///     println!("latest python SDK: {}", versions.python);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    executor: HttpExecutor,
    base_urls: Vec<String>,
}

impl Client {
    /// Create a client from `config`.
    ///
    /// Fails with [`Error::InvalidConfig`] when the timeout is zero or above
    /// [`MAX_TIMEOUT_MS`], when any base URL cannot be parsed or uses a
    /// scheme the policy rejects, or when the API key cannot form a header
    /// value. An empty candidate list is accepted here; operations on such a
    /// client fail with [`Error::NoCandidates`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.timeout_ms == 0 || config.timeout_ms > MAX_TIMEOUT_MS {
            return Err(Error::InvalidConfig(format!(
                "timeout must be in 1..={MAX_TIMEOUT_MS} ms, got {}",
                config.timeout_ms
            )));
        }

        let base_urls = config
            .base_urls
            .iter()
            .map(|raw| sanitize_base_url(raw, config.scheme_policy))
            .collect::<Result<Vec<_>>>()?;

        let executor = HttpExecutor::new(
            config.api_key.as_deref(),
            Duration::from_millis(config.timeout_ms),
        )?;

        debug!(?base_urls, timeout_ms = config.timeout_ms, "client constructed");

        Ok(Self { executor, base_urls })
    }

    /// The sanitized candidate base URLs, in fallback order.
    pub fn base_urls(&self) -> &[String] {
        &self.base_urls
    }

    /// Look up the caller's public IP address and country.
    pub async fn get_ip(&self) -> Result<IpResponse> {
        let payload = self.fetch(IP_PATH).await?;
        if !validate::is_ip_response(&payload) {
            return Err(Error::InvalidResponse(
                "IP lookup payload has an unexpected shape".to_string(),
            ));
        }
        into_typed(payload)
    }

    /// Look up extended details for the caller's IP address.
    pub async fn get_ip_details(&self) -> Result<IpDetailsResponse> {
        let payload = self.fetch(IP_DETAILS_PATH).await?;
        if !validate::is_ip_details_response(&payload) {
            return Err(Error::InvalidResponse(
                "IP details payload has an unexpected shape".to_string(),
            ));
        }
        into_typed(payload)
    }

    /// Fetch the latest published SDK versions.
    pub async fn get_sdk_versions(&self) -> Result<SdkVersionsResponse> {
        let payload = self.fetch(SDK_VERSION_PATH).await?;
        if !validate::is_sdk_versions_response(&payload) {
            return Err(Error::InvalidResponse(
                "SDK versions payload has an unexpected shape".to_string(),
            ));
        }
        into_typed(payload)
    }

    /// Join `path` onto every candidate and walk them. Transport only; the
    /// calling operation validates the committed payload.
    async fn fetch(&self, path: &str) -> Result<Value> {
        let urls: Vec<String> = self
            .base_urls
            .iter()
            .map(|base| build_url(base, path))
            .collect();
        self.executor.get_with_fallback(&urls).await
    }
}

fn into_typed<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| Error::InvalidResponse(format!("failed to decode payload: {e}")))
}
