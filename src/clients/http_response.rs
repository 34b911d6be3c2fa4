//! HTTP response type for the Textfly SDK.
//!
//! [`HttpResponse`] is the raw envelope a transport hands back: status code,
//! headers and the undecoded body. Decoding into JSON is the executor's job,
//! so the envelope keeps the body as text.

use std::collections::HashMap;

use chrono::DateTime;

/// A raw HTTP response from the Textfly API.
///
/// Header names are stored lower-cased; a header may carry several values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (key, values) in headers {
            normalized
                .entry(key.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 400
    }

    /// Returns `true` if the body is empty or whitespace only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Relative retry delay from a delta-seconds `Retry-After` header.
    ///
    /// Fractional values are rounded up. An HTTP-date `Retry-After` is an
    /// absolute signal and is reported by
    /// [`retry_at_timestamp`](Self::retry_at_timestamp) instead.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn retry_after_seconds(&self) -> Option<u64> {
        let value = self.header("retry-after")?.trim();
        value.parse::<u64>().ok().or_else(|| {
            value
                .parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map(|secs| secs.ceil() as u64)
        })
    }

    /// Absolute retry time as a unix timestamp.
    ///
    /// Read from an HTTP-date `Retry-After` header, falling back to an
    /// `X-RateLimit-Reset` header holding unix seconds.
    #[must_use]
    pub fn retry_at_timestamp(&self) -> Option<i64> {
        let from_retry_after = self
            .header("retry-after")
            .and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
            .map(|date| date.timestamp());

        from_retry_after.or_else(|| {
            self.header("x-ratelimit-reset")
                .and_then(|value| value.trim().parse::<i64>().ok())
        })
    }

    /// Returns `true` if the response carries any retry-timing signal.
    #[must_use]
    pub fn has_retry_hint(&self) -> bool {
        self.retry_after_seconds().is_some() || self.retry_at_timestamp().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_header(code: u16, name: &str, value: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        HttpResponse::new(code, headers, "")
    }

    #[test]
    fn test_is_ok_boundaries() {
        assert!(HttpResponse::new(200, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(400, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(429, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), "").is_ok());
    }

    #[test]
    fn test_header_names_are_normalized() {
        let response = with_header(200, "X-Request-Id", "abc-123");
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc-123"));
    }

    #[test]
    fn test_empty_body_detection() {
        assert!(HttpResponse::new(202, HashMap::new(), "").is_empty());
        assert!(HttpResponse::new(200, HashMap::new(), " \n").is_empty());
        assert!(!HttpResponse::new(200, HashMap::new(), "{}").is_empty());
    }

    #[test]
    fn test_retry_after_delta_seconds() {
        let response = with_header(429, "Retry-After", "30");
        assert_eq!(response.retry_after_seconds(), Some(30));
        assert_eq!(response.retry_at_timestamp(), None);
        assert!(response.has_retry_hint());
    }

    #[test]
    fn test_retry_after_fractional_rounds_up() {
        let response = with_header(429, "Retry-After", "2.5");
        assert_eq!(response.retry_after_seconds(), Some(3));
    }

    #[test]
    fn test_retry_after_http_date() {
        let response = with_header(429, "Retry-After", "Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(response.retry_after_seconds(), None);
        assert_eq!(response.retry_at_timestamp(), Some(1_445_412_480));
    }

    #[test]
    fn test_rate_limit_reset_header() {
        let response = with_header(429, "X-RateLimit-Reset", "1700000000");
        assert_eq!(response.retry_at_timestamp(), Some(1_700_000_000));
        assert!(response.has_retry_hint());
    }

    #[test]
    fn test_no_retry_hint() {
        let response = with_header(429, "Retry-After", "soon");
        assert!(!response.has_retry_hint());
        assert!(!HttpResponse::new(429, HashMap::new(), "").has_retry_hint());
    }
}
