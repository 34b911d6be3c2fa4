//! Request types for the Textfly SDK.
//!
//! Two layers live here:
//!
//! - [`RequestOptions`]: what a resource client asks for (query pairs, JSON
//!   body, extra headers) on top of a method and path.
//! - [`HttpRequest`]: the fully resolved request (absolute URL, merged
//!   headers, serialized body) handed to a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the Textfly API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method, used by Textfly for partial updates and actions.
    Post,
    /// HTTP PUT method, used by Textfly for creates and upserts.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options layered on top of a method and path.
///
/// Query pairs keep insertion order and never contain absent values:
/// [`query_opt`](Self::query_opt) skips `None` entirely, so omitted pagination
/// produces no query string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use textfly_sdk::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .query_opt("page", Some(2))
///     .query_opt("per_page", None::<u32>)
///     .json(json!({"name": "Welcome"}))
///     .header("X-Trace", "abc");
///
/// assert_eq!(options.query(), &[("page".to_string(), "2".to_string())]);
/// assert!(options.body().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter only when `value` is present.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query_param(key, value),
            None => self,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds an extra header.
    ///
    /// `Authorization` and `Accept` are always replaced by the executor's own
    /// values; `Content-Type` is replaced whenever a JSON body is sent.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Returns the query pairs in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Returns the extra headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<(String, String)>,
        Option<serde_json::Value>,
        HashMap<String, String>,
    ) {
        (self.query, self.body, self.headers)
    }
}

/// A fully resolved HTTP request handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL including any query string.
    pub url: String,
    /// Final merged headers.
    pub headers: HashMap<String, String>,
    /// Serialized request body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Looks up a header by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builds a URL-encoded query string from ordered pairs.
///
/// Returns an empty string when there are no pairs.
pub(crate) fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
