//! Configuration types for the Textfly SDK.
//!
//! # Overview
//!
//! - [`TextflyConfig`]: endpoint, credential and transport settings
//! - [`TextflyConfigBuilder`]: fluent builder for [`TextflyConfig`]
//! - [`ApiKey`]: validated bearer credential with masked debug output
//! - [`BaseUrl`]: validated API endpoint, trailing slash stripped
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use textfly_sdk::{ApiKey, BaseUrl, TextflyConfig};
//!
//! let config = TextflyConfig::builder()
//!     .base_url(BaseUrl::new("https://api.textfly.example").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.textfly.example");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Textfly SDK.
///
/// Holds the immutable endpoint and credential pair used by the
/// [`RequestExecutor`](crate::clients::RequestExecutor), plus settings that
/// only the default transport consumes (`timeout`).
#[derive(Clone, Debug)]
pub struct TextflyConfig {
    base_url: BaseUrl,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TextflyConfig {
    /// Creates a new builder for constructing a `TextflyConfig`.
    #[must_use]
    pub fn builder() -> TextflyConfigBuilder {
        TextflyConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout applied by the default transport.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TextflyConfig>();
};

/// Builder for constructing [`TextflyConfig`] instances.
///
/// `base_url` and `api_key` are required. `user_agent_prefix` and `timeout`
/// default to `None`.
#[derive(Debug, Default)]
pub struct TextflyConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TextflyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout used by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TextflyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<TextflyConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(TextflyConfig {
            base_url,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
