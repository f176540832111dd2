//! Client configuration
//!
//! Configuration for the NetLens client: API key, candidate base URLs,
//! request timeout, and the URL scheme policy. All fields have working
//! defaults; `ClientConfig::new()` with no further calls targets the
//! production endpoint anonymously.

use std::fmt;

/// Default base URL for the NetLens API
pub const DEFAULT_BASE_URL: &str = "https://api.netlens.io";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum permitted request timeout in milliseconds
pub const MAX_TIMEOUT_MS: u64 = 60_000;

/// Which URL schemes a base URL may use
///
/// Production traffic is HTTPS-only. The permissive variant exists for
/// local development against plain-HTTP servers and must be opted into
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemePolicy {
    /// Only `https://` base URLs are accepted (the default).
    #[default]
    HttpsOnly,
    /// Both `https://` and `http://` base URLs are accepted.
    AllowHttp,
}

impl SchemePolicy {
    /// Whether this policy accepts the given URL scheme.
    pub fn allows(&self, scheme: &str) -> bool {
        match self {
            SchemePolicy::HttpsOnly => scheme == "https",
            SchemePolicy::AllowHttp => scheme == "https" || scheme == "http",
        }
    }
}

/// Configuration for the NetLens client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent as a `Bearer` token, or `None` for anonymous access.
    pub api_key: Option<String>,
    /// Candidate base URLs, tried in order until one responds successfully.
    pub base_urls: Vec<String>,
    /// Request timeout in milliseconds. Must be in `1..=MAX_TIMEOUT_MS`.
    pub timeout_ms: u64,
    /// URL scheme policy applied when base URLs are sanitized.
    pub scheme_policy: SchemePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_urls: vec![DEFAULT_BASE_URL.to_string()],
            timeout_ms: DEFAULT_TIMEOUT_MS,
            scheme_policy: SchemePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key to send as a `Bearer` token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the candidate list with a single base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_urls = vec![base_url.into()];
        self
    }

    /// Replace the candidate list with an ordered set of base URLs.
    ///
    /// Order is significant: requests walk the list front to back and stop
    /// at the first host that yields a committed response.
    pub fn with_base_urls(mut self, base_urls: Vec<String>) -> Self {
        self.base_urls = base_urls;
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the URL scheme policy.
    pub fn with_scheme_policy(mut self, scheme_policy: SchemePolicy) -> Self {
        self.scheme_policy = scheme_policy;
        self
    }
}

// API keys must not leak through logs, so Debug never prints the key itself.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_urls", &self.base_urls)
            .field("timeout_ms", &self.timeout_ms)
            .field("scheme_policy", &self.scheme_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_urls, vec![DEFAULT_BASE_URL.to_string()]);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.scheme_policy, SchemePolicy::HttpsOnly);
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new()
            .with_api_key("nl_test_key")
            .with_base_urls(vec![
                "https://eu.netlens.io".to_string(),
                "https://us.netlens.io".to_string(),
            ])
            .with_timeout_ms(5_000)
            .with_scheme_policy(SchemePolicy::AllowHttp);

        assert_eq!(config.api_key.as_deref(), Some("nl_test_key"));
        assert_eq!(config.base_urls.len(), 2);
        assert_eq!(config.base_urls[0], "https://eu.netlens.io");
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.scheme_policy, SchemePolicy::AllowHttp);
    }

    #[test]
    fn test_with_base_url_replaces_list() {
        let config = ClientConfig::new()
            .with_base_urls(vec!["https://a.example".to_string(), "https://b.example".to_string()])
            .with_base_url("https://c.example");
        assert_eq!(config.base_urls, vec!["https://c.example".to_string()]);
    }

    #[test]
    fn test_scheme_policy_allows() {
        assert!(SchemePolicy::HttpsOnly.allows("https"));
        assert!(!SchemePolicy::HttpsOnly.allows("http"));
        assert!(!SchemePolicy::HttpsOnly.allows("ftp"));

        assert!(SchemePolicy::AllowHttp.allows("https"));
        assert!(SchemePolicy::AllowHttp.allows("http"));
        assert!(!SchemePolicy::AllowHttp.allows("ftp"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new().with_api_key("nl_live_secret_key");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("nl_live_secret_key"));
        assert!(rendered.contains("REDACTED"));

        let anonymous = format!("{:?}", ClientConfig::new());
        assert!(anonymous.contains("api_key: None"));
    }
}
