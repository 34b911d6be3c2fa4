//! Error types for Textfly API calls.
//!
//! Every failed call surfaces as a [`TextflyError`], which has two tiers:
//!
//! - [`ApiError`]: any remote or transport failure, with a message and a
//!   numeric code (the HTTP status, or 0 when none is known)
//! - [`RateLimitError`]: a 429 response that carried a retry hint; it wraps
//!   an [`ApiError`] and adds the retry timing
//!
//! Transports report their own failures with [`TransportError`]; the
//! executor translates those into the tier above.
//!
//! # Example
//!
//! ```rust,ignore
//! use textfly_sdk::TextflyError;
//!
//! match client.contacts().get(1, 42).await {
//!     Ok(contact) => println!("{contact}"),
//!     Err(TextflyError::RateLimited(e)) => {
//!         println!("slow down, retry at {:?}", e.retry_at());
//!     }
//!     Err(e) => println!("API error {}: {}", e.code(), e.message()),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// Boxed error used as the cause of an [`ApiError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A failed Textfly API call.
///
/// `code` is the HTTP status when one is known and 0 otherwise (for example
/// on a connection failure).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message, taken from the API's error body when possible.
    pub message: String,
    /// HTTP status code, or 0 when no status is known.
    pub code: u16,
    /// The underlying failure, if any.
    #[source]
    pub cause: Option<BoxError>,
}

impl ApiError {
    /// Creates an error without a cause.
    #[must_use]
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
            cause: None,
        }
    }

    /// Creates an error that wraps an underlying failure.
    #[must_use]
    pub fn with_cause(
        message: impl Into<String>,
        code: u16,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            message: message.into(),
            code,
            cause: Some(cause.into()),
        }
    }
}

/// A rate-limited Textfly API call (HTTP 429 with a retry hint).
///
/// Carries the relative delay (`Retry-After` seconds) and/or the absolute
/// retry time (HTTP-date `Retry-After` or `X-RateLimit-Reset`). The hints are
/// advisory; nothing is retried automatically.
#[derive(Debug)]
pub struct RateLimitError {
    error: ApiError,
    retry_after_seconds: Option<u64>,
    retry_at_timestamp: Option<i64>,
}

impl RateLimitError {
    /// Creates a rate-limit error from its base error and retry hints.
    #[must_use]
    pub const fn new(
        error: ApiError,
        retry_after_seconds: Option<u64>,
        retry_at_timestamp: Option<i64>,
    ) -> Self {
        Self {
            error,
            retry_after_seconds,
            retry_at_timestamp,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Returns the HTTP status code (429).
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.error.code
    }

    /// Returns the underlying [`ApiError`].
    #[must_use]
    pub const fn api_error(&self) -> &ApiError {
        &self.error
    }

    /// Returns the relative retry delay in seconds, if the server sent one.
    #[must_use]
    pub const fn retry_after_seconds(&self) -> Option<u64> {
        self.retry_after_seconds
    }

    /// Returns the absolute retry time the server sent, as unix seconds.
    #[must_use]
    pub const fn retry_at_timestamp(&self) -> Option<i64> {
        self.retry_at_timestamp
    }

    /// Returns when the request may be retried.
    ///
    /// The absolute time wins when present. Otherwise the relative delay is
    /// added to the current time on every call. `None` means the server gave
    /// no usable signal. Values beyond chrono's range saturate to
    /// `DateTime::<Utc>::MAX_UTC` (or `MIN_UTC` for a timestamp far in the
    /// past).
    #[must_use]
    pub fn retry_at(&self) -> Option<DateTime<Utc>> {
        if let Some(timestamp) = self.retry_at_timestamp {
            let saturated = if timestamp < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            };
            return Some(DateTime::from_timestamp(timestamp, 0).unwrap_or(saturated));
        }

        let seconds = i64::try_from(self.retry_after_seconds?).unwrap_or(i64::MAX);
        let retry_at = Duration::try_seconds(seconds)
            .and_then(|delay| Utc::now().checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Some(retry_at)
    }
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for RateLimitError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}

/// Unified error type for Textfly API calls.
///
/// Match on [`TextflyError::RateLimited`] to handle rate limiting without
/// inspecting messages; use [`message`](Self::message) and
/// [`code`](Self::code) for everything else.
#[derive(Debug, Error)]
pub enum TextflyError {
    /// A remote or transport failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A rate-limited request with retry timing.
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
}

impl TextflyError {
    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.api_error().message
    }

    /// Returns the HTTP status code, or 0 when none is known.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.api_error().code
    }

    /// Returns the base error shared by both tiers.
    #[must_use]
    pub const fn api_error(&self) -> &ApiError {
        match self {
            Self::Api(error) => error,
            Self::RateLimited(error) => error.api_error(),
        }
    }

    /// Returns the rate-limit details when this is a rate-limit error.
    #[must_use]
    pub const fn as_rate_limit(&self) -> Option<&RateLimitError> {
        match self {
            Self::RateLimited(error) => Some(error),
            Self::Api(_) => None,
        }
    }

    /// Returns `true` for rate-limit errors.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Failure reported by a [`Transport`](crate::clients::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with an error status; the response is attached.
    #[error("{message}")]
    Status {
        /// Transport-level description of the failure.
        message: String,
        /// The error response.
        response: HttpResponse,
    },

    /// The request never produced a response (connection, TLS, timeout).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// Any other failure raised by a custom transport.
    #[error("{message}")]
    Custom {
        /// Description of the failure.
        message: String,
        /// Status code associated with the failure, or 0.
        code: u16,
    },
}

impl TransportError {
    /// Wraps an error response, describing it the way HTTP clients usually do.
    #[must_use]
    pub fn status(method: HttpMethod, url: &str, response: HttpResponse) -> Self {
        let reason = reqwest::StatusCode::from_u16(response.code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown");
        let kind = if response.code >= 500 {
            "Server error"
        } else {
            "Client error"
        };

        Self::Status {
            message: format!(
                "{kind}: `{method} {url}` resulted in a `{} {reason}` response",
                response.code
            ),
            response,
        }
    }

    /// Creates a custom transport failure.
    #[must_use]
    pub fn custom(message: impl Into<String>, code: u16) -> Self {
        Self::Custom {
            message: message.into(),
            code,
        }
    }

    /// Returns the attached error response, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Status { response, .. } => Some(response),
            Self::Network(_) | Self::Custom { .. } => None,
        }
    }

    /// Returns the status code tied to this failure, or 0.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Status { response, .. } => response.code,
            Self::Network(error) => error.status().map_or(0, |status| status.as_u16()),
            Self::Custom { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_api_error_displays_message() {
        let error = ApiError::new("Contact not found", 404);
        assert_eq!(error.to_string(), "Contact not found");
        assert_eq!(error.code, 404);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_api_error_keeps_cause() {
        let cause = TransportError::custom("connection reset", 0);
        let error = ApiError::with_cause("connection reset", 0, cause);
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "connection reset");
    }

    #[test]
    fn test_retry_at_prefers_absolute_timestamp() {
        let error = RateLimitError::new(
            ApiError::new("Too Many Attempts.", 429),
            Some(30),
            Some(1_700_000_000),
        );
        assert_eq!(error.retry_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_retry_at_derives_from_relative_delay() {
        let error = RateLimitError::new(ApiError::new("Too Many Attempts.", 429), Some(60), None);

        let before = Utc::now().timestamp();
        let retry_at = error.retry_at().unwrap().timestamp();
        let after = Utc::now().timestamp();

        assert!(retry_at >= before + 60);
        assert!(retry_at <= after + 60);
        assert_eq!(error.retry_at_timestamp(), None);
    }

    #[test]
    fn test_retry_at_saturates_huge_relative_delay() {
        let error = RateLimitError::new(
            ApiError::new("Too Many Attempts.", 429),
            Some(100_000_000_000_000_000),
            None,
        );
        assert_eq!(error.retry_at(), Some(DateTime::<Utc>::MAX_UTC));

        let error = RateLimitError::new(ApiError::new("Too Many Attempts.", 429), Some(u64::MAX), None);
        assert_eq!(error.retry_at(), Some(DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_retry_at_saturates_out_of_range_timestamp() {
        let error = RateLimitError::new(ApiError::new("Too Many Attempts.", 429), None, Some(i64::MAX));
        assert_eq!(error.retry_at(), Some(DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_network_error_message_is_unchanged() {
        let inner = reqwest::Client::new().get("not a url").build().unwrap_err();
        let message = inner.to_string();

        let error = TransportError::from(inner);
        assert_eq!(error.to_string(), message);
        assert_eq!(error.code(), 0);
        assert!(error.response().is_none());
    }

    #[test]
    fn test_retry_at_unknown_without_signal() {
        let error = RateLimitError::new(ApiError::new("Too Many Attempts.", 429), None, None);
        assert!(error.retry_at().is_none());
    }

    #[test]
    fn test_textfly_error_accessors() {
        let error: TextflyError = ApiError::new("The given data was invalid.", 422).into();
        assert_eq!(error.message(), "The given data was invalid.");
        assert_eq!(error.code(), 422);
        assert!(!error.is_rate_limited());
        assert!(error.as_rate_limit().is_none());

        let error: TextflyError =
            RateLimitError::new(ApiError::new("Too Many Attempts.", 429), Some(5), None).into();
        assert_eq!(error.to_string(), "Too Many Attempts.");
        assert_eq!(error.code(), 429);
        assert_eq!(error.as_rate_limit().unwrap().retry_after_seconds(), Some(5));
    }

    #[test]
    fn test_transport_status_error_message_and_code() {
        let response = HttpResponse::new(422, HashMap::new(), "{}");
        let error = TransportError::status(
            HttpMethod::Put,
            "https://api.example.test/api/v1/req/2/contacts",
            response,
        );

        assert_eq!(error.code(), 422);
        assert!(error.response().is_some());
        assert_eq!(
            error.to_string(),
            "Client error: `PUT https://api.example.test/api/v1/req/2/contacts` resulted in a `422 Unprocessable Entity` response"
        );
    }

    #[test]
    fn test_custom_transport_error_has_no_response() {
        let error = TransportError::custom("timed out", 0);
        assert!(error.response().is_none());
        assert_eq!(error.code(), 0);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn StdError = &ApiError::new("x", 0);
        let _: &dyn StdError = &RateLimitError::new(ApiError::new("x", 429), None, None);
        let _: &dyn StdError = &TextflyError::Api(ApiError::new("x", 0));
        let _: &dyn StdError = &TransportError::custom("x", 0);
    }
}
