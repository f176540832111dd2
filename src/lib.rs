//! NetLens API Client Library
//!
//! This crate provides a Rust client for the NetLens REST API: basic IP
//! lookups, detailed IP geolocation data, and the published SDK version
//! listing. The pipeline is a single timeout-bounded GET per host with an
//! ordered fallback walk over candidate base URLs and a structural check on
//! every payload before it is handed back as a typed response.
//!
//! # Example
//!
//! ```rust,no_run
//! use netlens_client::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new().with_api_key("nl_live_abc123"))?;
//!
//!     let ip = client.get_ip().await?;
//!     println!("caller IP: {} ({})", ip.ip, ip.country);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod http;
pub mod types;
pub mod url;
pub mod validate;

pub use client::Client;
pub use config::{ClientConfig, SchemePolicy};
pub use types::{IpDetailsResponse, IpResponse, SdkVersionsResponse};

/// Result type for NetLens client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for NetLens client operations
///
/// Every failure category carries a human-readable message through `Display`;
/// HTTP-layer failures additionally expose the status code and the server's
/// machine-readable code string via [`Error::status`] and [`Error::code`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed base URL, disallowed scheme, out-of-range timeout, or an API
    /// key that cannot form a header value. Raised at construction time,
    /// before any request is issued.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request exceeded its deadline. Retryable.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The deadline that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// Transport-level failure (DNS, connection refused, TLS). Retryable.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code from the response body, when present.
        code: Option<String>,
        /// Server-provided message, or `HTTP <status>: <reason>` when the
        /// body carried none.
        message: String,
    },

    /// The server answered 2xx but did not declare a JSON body.
    #[error("response content type is not JSON")]
    InvalidContentType {
        /// The offending `Content-Type` value, when one was sent at all.
        content_type: Option<String>,
    },

    /// The server answered 2xx but the body is not valid JSON or violates
    /// the structural contract of the requested operation.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The fallback candidate list was empty; no request was attempted.
    #[error("no candidate base URLs to try")]
    NoCandidates,

    /// Any other failure. The underlying error text is not exposed.
    #[error("unexpected error during request")]
    Unknown,
}

impl Error {
    /// HTTP status code for [`Error::Http`] failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable error code from the server, when one was sent.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether the caller may reasonably retry the failed call.
    ///
    /// True exactly for [`Error::Timeout`] and [`Error::Network`]; contract
    /// violations and configuration errors are not retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout { .. } | Error::Network(_))
    }
}
