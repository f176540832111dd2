//! HTTP execution layer
//!
//! This module owns all network I/O for the client: a timeout-bounded GET
//! executor that maps transport and protocol failures onto [`Error`], and a
//! fallback walk that tries candidate URLs in order until one commits a
//! response. Payload shape checks live in [`crate::validate`] and run after
//! the walk has committed to a host.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{Error, Result};

// =============================================================================
// Error Response Format
// =============================================================================

/// Error payload the NetLens API returns on non-2xx statuses.
///
/// Both fields are optional on the wire; a body may carry a machine code
/// without any message.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// =============================================================================
// Executor
// =============================================================================

/// Timeout-bounded GET executor with fixed JSON headers.
///
/// All requests carry `Content-Type: application/json`, `Accept:
/// application/json`, the client's `User-Agent`, and, when an API key is
/// configured, `Authorization: Bearer <key>`. One executor is shared across
/// all candidate base URLs so the underlying connection pool is reused.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpExecutor {
    /// Build an executor with the given credentials and per-request timeout.
    pub fn new(api_key: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = api_key {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| Error::InvalidConfig(format!("API key is not a valid header value: {e}")))?;
            auth_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(format!("netlens-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    /// Issue a GET to `url` and decode the body as JSON.
    ///
    /// The timeout covers the full exchange up to response arrival. A 2xx
    /// answer must declare a JSON content type and carry a parseable JSON
    /// body; anything else maps onto the matching [`Error`] variant.
    pub async fn get(&self, url: &str) -> Result<Value> {
        debug!(url, "sending GET request");

        let timeout_ms = self.timeout.as_millis() as u64;
        let response = tokio::time::timeout(self.timeout, self.client.get(url).send())
            .await
            .map_err(|_| Error::Timeout { timeout_ms })?
            .map_err(|e| map_transport_error(timeout_ms, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(decode_error_response(response).await);
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        match content_type.as_deref() {
            Some(value) if is_json_content_type(value) => {}
            _ => return Err(Error::InvalidContentType { content_type }),
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(timeout_ms, e))?;
        serde_json::from_str(&body)
            .map_err(|e| Error::InvalidResponse(format!("body is not valid JSON: {e}")))
    }

    // =========================================================================
    // Fallback Walk
    // =========================================================================

    /// Try each candidate URL in order, returning the first committed
    /// response.
    ///
    /// Candidates are attempted sequentially with no delay between them and
    /// no parallelism. The walk stops at the first success; when every
    /// candidate fails, the error from the last attempt is surfaced. An
    /// empty candidate list fails with [`Error::NoCandidates`] without
    /// touching the network.
    pub async fn get_with_fallback(&self, urls: &[String]) -> Result<Value> {
        if urls.is_empty() {
            return Err(Error::NoCandidates);
        }

        let mut last_error: Option<Error> = None;
        for url in urls {
            match self.get(url).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(%url, error = %err, "candidate URL failed");
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(Error::NoCandidates))
    }
}

// =============================================================================
// Response Decoding
// =============================================================================

fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("application/json")
}

fn map_transport_error(timeout_ms: u64, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout { timeout_ms }
    } else if err.is_connect() || err.is_request() || err.is_body() || err.is_decode() {
        Error::Network(err.to_string())
    } else {
        Error::Unknown
    }
}

async fn decode_error_response(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let reason = response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string();
    let body = response.text().await.unwrap_or_default();

    // Best-effort decode: an unparseable body degrades to an empty one.
    let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();

    Error::Http {
        status,
        code: parsed.code,
        message: parsed
            .message
            .unwrap_or_else(|| format!("HTTP {status}: {reason}")),
    }
}

// =============================================================================
// Tests
// =============================================================================
