//! Scheduled messages resource.
//!
//! Note the verbs: create is `POST` and update is `PUT`, the reverse of the
//! contact resources.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpMethod, RequestExecutor, RequestOptions, TextflyError};
use crate::rest::resource::{json_payload, pagination, ResourceClient};

/// Client for `/api/v1/req/{account_id}/scheduled-messages`.
#[derive(Debug, Clone)]
pub struct ScheduledMessagesClient {
    executor: Arc<RequestExecutor>,
}

impl ResourceClient for ScheduledMessagesClient {
    const RESOURCE: &'static str = "scheduled-messages";

    fn executor(&self) -> &RequestExecutor {
        &self.executor
    }
}

impl ScheduledMessagesClient {
    /// Creates a scheduled messages client over a shared executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Lists scheduled messages, optionally paginated.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn list(
        &self,
        account_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value, TextflyError> {
        self.fetch(
            HttpMethod::Get,
            &Self::collection_path(account_id),
            pagination(page, per_page),
        )
        .await
    }

    /// Schedules a message.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the payload cannot be serialized or the
    /// request fails.
    pub async fn create<P>(&self, account_id: u64, payload: &P) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.fetch(
            HttpMethod::Post,
            &Self::collection_path(account_id),
            json_payload(payload)?,
        )
        .await
    }

    /// Updates a scheduled message.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the payload cannot be serialized or the
    /// request fails.
    pub async fn update<P>(
        &self,
        account_id: u64,
        message_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.fetch(
            HttpMethod::Put,
            &Self::member_path(account_id, message_id),
            json_payload(payload)?,
        )
        .await
    }

    /// Deletes a scheduled message.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn delete(&self, account_id: u64, message_id: u64) -> Result<(), TextflyError> {
        self.dispatch(
            HttpMethod::Delete,
            &Self::member_path(account_id, message_id),
            RequestOptions::new(),
        )
        .await
    }

    /// Triggers an immediate send.
    ///
    /// Returns `None` when the API accepts the send without a body
    /// (typically 202).
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn send(
        &self,
        account_id: u64,
        message_id: u64,
    ) -> Result<Option<Value>, TextflyError> {
        let path = format!("{}/send", Self::member_path(account_id, message_id));
        self.fetch_optional(HttpMethod::Post, &path, RequestOptions::new())
            .await
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScheduledMessagesClient>();
};
