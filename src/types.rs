//! Response types for the NetLens API
//!
//! Wire representations use camelCase field names; the structs here follow
//! Rust naming and rely on serde renames for the mapping.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Basic IP lookup result from `/api/v1/ip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpResponse {
    /// The caller's public IP address.
    pub ip: String,
    /// ISO 3166-1 alpha-2 country code the address resolves to.
    pub country: String,
}

/// Detailed IP lookup result from `/api/v1/ip/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpDetailsResponse {
    /// The caller's public IP address.
    pub ip: String,
    /// The `User-Agent` the service observed on the request.
    pub user_agent: String,
    /// Autonomous system number announcing the address, e.g. `AS15169`.
    pub asn: String,
    /// ISO 3166-1 alpha-2 country code the address resolves to.
    pub country: String,
    /// ISO 4217 currency code for that country.
    pub currency: String,
    /// Languages spoken in that country, as BCP 47 tags.
    pub languages: Vec<String>,
    /// Server-side observation time, RFC 3339 formatted.
    pub timestamp: String,
    /// Version of the dataset the lookup was served from.
    pub version: String,
}

impl IpDetailsResponse {
    /// Parse the `timestamp` field into a [`chrono`] datetime.
    pub fn parse_timestamp(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| Error::InvalidResponse(format!("invalid timestamp `{}`: {e}", self.timestamp)))
    }
}

/// Published SDK versions from `/api/v1/sdk/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkVersionsResponse {
    /// Latest released version of the JavaScript SDK.
    pub javascript: String,
    /// Latest released version of the Python SDK.
    pub python: String,
}
