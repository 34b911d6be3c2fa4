//! The resource-client contract shared by every Textfly resource.
//!
//! A resource client turns one logical operation ("list contacts, page 2")
//! into a method, a path and optional query/payload, then hands it to the
//! shared [`RequestExecutor`]. The trait supplies the path helpers and the
//! three ways an operation can treat the decoded result:
//!
//! - [`fetch`](ResourceClient::fetch): the operation promises a structure, so
//!   an empty body becomes an empty JSON object
//! - [`fetch_optional`](ResourceClient::fetch_optional): an empty body is a
//!   legitimate outcome and is passed through as `None`
//! - [`dispatch`](ResourceClient::dispatch): the operation returns nothing
//!
//! # Implementing a Resource Client
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use textfly_sdk::clients::RequestExecutor;
//! use textfly_sdk::rest::ResourceClient;
//!
//! pub struct KeywordsClient {
//!     executor: Arc<RequestExecutor>,
//! }
//!
//! impl ResourceClient for KeywordsClient {
//!     const RESOURCE: &'static str = "keywords";
//!
//!     fn executor(&self) -> &RequestExecutor {
//!         &self.executor
//!     }
//! }
//! ```

use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{ApiError, HttpMethod, RequestExecutor, RequestOptions, TextflyError};
use crate::rest::path::account_path;

/// A client for one account-scoped Textfly resource family.
#[allow(async_fn_in_trait)]
pub trait ResourceClient {
    /// The hyphenated resource segment (e.g. `"contact-lists"`).
    const RESOURCE: &'static str;

    /// Returns the executor every operation goes through.
    fn executor(&self) -> &RequestExecutor;

    /// Returns `/api/v1/req/{account_id}/{RESOURCE}`.
    #[must_use]
    fn collection_path(account_id: u64) -> String {
        account_path(account_id, Self::RESOURCE)
    }

    /// Returns `/api/v1/req/{account_id}/{RESOURCE}/{id}`.
    #[must_use]
    fn member_path<I: Display>(account_id: u64, id: I) -> String {
        format!("{}/{id}", Self::collection_path(account_id))
    }

    /// Executes a request whose result is always a structure.
    ///
    /// # Errors
    ///
    /// Returns any [`TextflyError`] raised by the executor.
    async fn fetch(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value, TextflyError> {
        let decoded = self.executor().execute(method, path, options).await?;
        Ok(decoded.unwrap_or_else(|| Value::Object(Map::new())))
    }

    /// Executes a request whose result may legitimately be empty.
    ///
    /// # Errors
    ///
    /// Returns any [`TextflyError`] raised by the executor.
    async fn fetch_optional(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, TextflyError> {
        self.executor().execute(method, path, options).await
    }

    /// Executes a request and discards its result.
    ///
    /// # Errors
    ///
    /// Returns any [`TextflyError`] raised by the executor.
    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<(), TextflyError> {
        self.executor().execute(method, path, options).await?;
        Ok(())
    }
}

/// Builds options carrying `page`/`per_page`, omitting absent values.
#[must_use]
pub fn pagination(page: Option<u32>, per_page: Option<u32>) -> RequestOptions {
    RequestOptions::new()
        .query_opt("page", page)
        .query_opt("per_page", per_page)
}

/// Builds options carrying `payload` as the JSON body.
///
/// # Errors
///
/// Returns an [`ApiError`] with code 0 if `payload` cannot be represented as
/// JSON (for example a map with non-string keys).
pub fn json_payload<P: Serialize + ?Sized>(payload: &P) -> Result<RequestOptions, TextflyError> {
    let body = serde_json::to_value(payload).map_err(|e| {
        ApiError::with_cause(format!("Failed to serialize request body: {e}"), 0, e)
    })?;
    Ok(RequestOptions::new().json(body))
}
