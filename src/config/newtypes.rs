//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! [`RequestExecutor`](crate::clients::RequestExecutor) can never be built
//! from an empty credential or a scheme-less endpoint.

use crate::error::ConfigError;
use std::fmt;

/// A validated Textfly API key.
///
/// The key is sent as a bearer token on every request. Its `Debug` output is
/// masked so the credential does not leak into logs.
///
/// # Example
///
/// ```rust
/// use textfly_sdk::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Returns the `Authorization` header value for this key.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the Textfly API.
///
/// Only `http` and `https` schemes are accepted. Trailing slashes are stripped
/// so resource paths (which always begin with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use textfly_sdk::BaseUrl;
///
/// let url = BaseUrl::new("https://api.textfly.example/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.textfly.example");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host = url[scheme_end + 3..]
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Joins an absolute path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
