//! HTTP layer for Textfly API communication.
//!
//! This module provides the request execution pipeline every resource
//! operation shares: credential injection, request/response marshalling and
//! the translation of failures into [`TextflyError`].
//!
//! # Overview
//!
//! - [`RequestExecutor`]: builds, sends and decodes authenticated requests
//! - [`Transport`]: the pluggable HTTP round-trip; [`ReqwestTransport`] is
//!   the default
//! - [`RequestOptions`]: per-call query pairs, JSON body and extra headers
//! - [`HttpRequest`] / [`HttpResponse`]: the raw envelopes a transport sees
//! - [`TextflyError`], [`ApiError`], [`RateLimitError`]: the error tier
//!   callers handle
//! - [`TransportError`]: what a transport reports on failure
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use textfly_sdk::clients::{ReqwestTransport, RequestExecutor, RequestOptions};
//!
//! let transport = Arc::new(ReqwestTransport::new(&config)?);
//! let executor = RequestExecutor::new(&config, transport);
//!
//! let lists = executor
//!     .get("/api/v1/req/42/contact-lists", RequestOptions::new())
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! Nothing is retried. A 429 response carrying `Retry-After` or
//! `X-RateLimit-Reset` surfaces as [`TextflyError::RateLimited`] and the
//! caller decides when to resubmit.

mod errors;
mod executor;
mod http_request;
mod http_response;
mod transport;

pub use errors::{ApiError, BoxError, RateLimitError, TextflyError, TransportError};
pub use executor::{RequestExecutor, INVALID_JSON_MESSAGE, RATE_LIMIT_STATUS, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestOptions};
pub use http_response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};
