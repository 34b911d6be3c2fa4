//! Request executor for Textfly API communication.
//!
//! [`RequestExecutor`] is the single path every resource operation goes
//! through. It injects credentials, resolves the URL, serializes the body,
//! calls the [`Transport`], decodes the JSON response and turns every failure
//! into a [`TextflyError`].

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::errors::{ApiError, RateLimitError, TextflyError, TransportError};
use crate::clients::http_request::{encode_query, HttpMethod, HttpRequest, RequestOptions};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{ApiKey, BaseUrl, TextflyConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message used when a successful response carries a body that is not JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from API";

/// HTTP status the API uses for rate limiting.
pub const RATE_LIMIT_STATUS: u16 = 429;

/// Executes authenticated requests against the Textfly API.
///
/// The executor owns the base URL and the API key, both fixed at
/// construction. It keeps no other state between calls, never retries, and
/// holds no locks, so a single instance can be shared freely across tasks.
///
/// # Header precedence
///
/// From lowest to highest: the default `User-Agent`, caller headers from
/// [`RequestOptions`], `Content-Type: application/json` when a body is sent,
/// then `Authorization` and `Accept`. Header names compare case-insensitively
/// and a higher layer replaces a lower one, so a caller can never override
/// the credential.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use textfly_sdk::clients::{HttpMethod, ReqwestTransport, RequestExecutor, RequestOptions};
///
/// let transport = Arc::new(ReqwestTransport::new(&config)?);
/// let executor = RequestExecutor::new(&config, transport);
///
/// let contacts = executor
///     .execute(
///         HttpMethod::Get,
///         "/api/v1/req/42/contacts",
///         RequestOptions::new().query_opt("page", Some(2)),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct RequestExecutor {
    base_url: BaseUrl,
    api_key: ApiKey,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestExecutor>();
};

impl RequestExecutor {
    /// Creates an executor for `config` that sends requests through `transport`.
    #[must_use]
    pub fn new(config: &TextflyConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Textfly SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            base_url: config.base_url().clone(),
            api_key: config.api_key().clone(),
            default_headers,
            transport,
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers (before credential injection).
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, TextflyError> {
        self.execute(HttpMethod::Get, path, options).await
    }

    /// Sends a POST request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, TextflyError> {
        self.execute(HttpMethod::Post, path, options).await
    }

    /// Sends a PUT request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn put(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, TextflyError> {
        self.execute(HttpMethod::Put, path, options).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, TextflyError> {
        self.execute(HttpMethod::Delete, path, options).await
    }

    /// Executes a request and decodes the response.
    ///
    /// Returns `Ok(None)` when the response body is empty (typically 202 or
    /// 204), otherwise the decoded JSON value exactly as the API sent it.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError::RateLimited`] for a 429 response carrying a
    /// retry hint, and [`TextflyError::Api`] for every other failure: error
    /// statuses, network failures, or a success body that is not valid JSON.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, TextflyError> {
        let request = self.build_request(method, path, options)?;
        let url = request.url.clone();

        tracing::debug!("Sending {} request to Textfly API at {}", method, path);

        let outcome = match self.transport.send(request).await {
            Ok(response) if !response.is_ok() => {
                Err(TransportError::status(method, &url, response))
            }
            other => other,
        };

        match outcome {
            Ok(response) => Self::decode(&response),
            Err(error) => Err(Self::translate_failure(path, error)),
        }
    }

    /// Resolves `path` and `options` into the request handed to the transport.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] with code 0 if the JSON body cannot be
    /// serialized.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let (query, body, extra_headers) = options.into_parts();

        let mut url = if path.starts_with('/') {
            self.base_url.join(path)
        } else {
            self.base_url.join(&format!("/{path}"))
        };
        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(&query));
        }

        let mut headers = self.default_headers.clone();
        for (key, value) in extra_headers {
            set_header(&mut headers, &key, value);
        }

        let body = body
            .map(|value| {
                serde_json::to_string(&value).map_err(|e| {
                    ApiError::with_cause(format!("Failed to serialize request body: {e}"), 0, e)
                })
            })
            .transpose()?;
        if body.is_some() {
            set_header(&mut headers, "Content-Type", "application/json");
        }

        set_header(&mut headers, "Authorization", self.api_key.bearer());
        set_header(&mut headers, "Accept", "application/json");

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Decodes a successful response body.
    fn decode(response: &HttpResponse) -> Result<Option<Value>, TextflyError> {
        if response.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::with_cause(INVALID_JSON_MESSAGE, response.code, e).into())
    }

    /// Translates a transport failure into the SDK error tier.
    fn translate_failure(path: &str, error: TransportError) -> TextflyError {
        let code = error.code();
        let fallback = error.to_string();

        let Some(failure) = error.response().map(ResponseFailure::from_response) else {
            tracing::debug!("Textfly API request to {} failed: {}", path, fallback);
            return ApiError::with_cause(fallback, code, error).into();
        };

        match &failure.request_id {
            Some(request_id) => tracing::debug!(
                "Textfly API request to {} failed with status {} (request id {})",
                path,
                code,
                request_id
            ),
            None => tracing::debug!("Textfly API request to {} failed with status {}", path, code),
        }

        let message = failure.message.unwrap_or(fallback);
        let retry_hint = failure.retry_hint;
        let api_error = ApiError::with_cause(message, code, error);
        match retry_hint {
            Some((retry_after_seconds, retry_at_timestamp)) => {
                tracing::warn!(
                    "Rate limited by Textfly API at {} (retry after {:?}s, retry at {:?})",
                    path,
                    retry_after_seconds,
                    retry_at_timestamp
                );
                RateLimitError::new(api_error, retry_after_seconds, retry_at_timestamp).into()
            }
            None => api_error.into(),
        }
    }
}

/// What the executor needs from an error response, detached from it.
struct ResponseFailure {
    message: Option<String>,
    request_id: Option<String>,
    retry_hint: Option<(Option<u64>, Option<i64>)>,
}

impl ResponseFailure {
    fn from_response(response: &HttpResponse) -> Self {
        let retry_hint = (response.code == RATE_LIMIT_STATUS && response.has_retry_hint())
            .then(|| (response.retry_after_seconds(), response.retry_at_timestamp()));

        Self {
            message: error_message(response),
            request_id: response.request_id().map(str::to_string),
            retry_hint,
        }
    }
}

/// Replaces any header named `name` (ignoring case) with `value`.
fn set_header(headers: &mut HashMap<String, String>, name: &str, value: impl Into<String>) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value.into());
}

/// Picks the human message for an error response.
///
/// Prefers a string `error` field, then a string `message` field, then the
/// raw body. Returns `None` for an empty body.
fn error_message(response: &HttpResponse) -> Option<String> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&response.body) {
        for key in ["error", "message"] {
            if let Some(Value::String(message)) = map.get(key) {
                return Some(message.clone());
            }
        }
    }

    (!response.is_empty()).then(|| response.body.clone())
}
