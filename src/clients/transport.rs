//! Pluggable HTTP transport.
//!
//! The [`RequestExecutor`](crate::clients::RequestExecutor) never talks to the
//! network itself. It hands a resolved [`HttpRequest`] to a [`Transport`] and
//! interprets whatever comes back. [`ReqwestTransport`] is the default; tests
//! and embedders can supply their own.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::TextflyConfig;
use crate::error::ConfigError;

/// Performs a single HTTP round-trip.
///
/// Implementations either return the response or fail with a
/// [`TransportError`]. Error statuses may be reported either way: as
/// `Ok` with a status of 400 or above, or as [`TransportError::Status`] with
/// the response attached. The executor treats both identically.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends the request and returns the raw response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default [`Transport`] backed by `reqwest`.
///
/// Error statuses (400 and above) are reported as
/// [`TransportError::Status`] with the response attached.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the timeout from `config`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportBuild`] if the TLS backend or the
    /// underlying client cannot be initialized.
    pub fn new(config: &TextflyConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| ConfigError::TransportBuild {
            reason: e.to_string(),
        })?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, headers, body);
        if response.is_ok() {
            Ok(response)
        } else {
            Err(TransportError::status(request.method, &request.url, response))
        }
    }
}
