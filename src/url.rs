//! Base URL sanitization and endpoint URL construction
//!
//! Base URLs are sanitized once, at client construction, so that every
//! request URL is produced by plain string concatenation with no per-request
//! parsing. Sanitization normalizes the origin, keeps any path prefix, and
//! strips the trailing slash; [`build_url`] then joins base and endpoint
//! path with exactly one slash between them.

use reqwest::Url;

use crate::config::SchemePolicy;
use crate::{Error, Result};

/// Sanitize a candidate base URL.
///
/// The input must parse as an absolute URL whose scheme is accepted by
/// `policy`. The result is the ASCII origin (scheme, host, non-default port)
/// plus the URL's path with any trailing slash removed; userinfo, query, and
/// fragment are discarded.
pub fn sanitize_base_url(raw: &str, policy: SchemePolicy) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| Error::InvalidConfig(format!("invalid base URL `{trimmed}`: {e}")))?;

    if !policy.allows(url.scheme()) {
        return Err(Error::InvalidConfig(format!(
            "scheme `{}` is not allowed for base URL `{trimmed}`",
            url.scheme()
        )));
    }

    let origin = url.origin().ascii_serialization();
    let path = url.path();
    let base = format!("{origin}{path}");
    Ok(base.strip_suffix('/').unwrap_or(&base).to_string())
}

/// Join a sanitized base URL and an endpoint path with a single slash.
pub fn build_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
