//! Configuration error types for the Textfly SDK.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or endpoints are rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use textfly_sdk::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Textfly API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.textfly.example').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The default HTTP transport could not be created.
    #[error("Failed to create HTTP transport: {reason}")]
    TransportBuild {
        /// Why the underlying HTTP client refused to build.
        reason: String,
    },
}
