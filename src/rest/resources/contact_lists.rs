//! Contact lists resource.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RequestExecutor, RequestOptions, TextflyError};
use crate::rest::resource::{json_payload, pagination, ResourceClient};

/// Attributes for creating or renaming a contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListPayload {
    /// The list name; required on create.
    pub name: String,
}

impl ContactListPayload {
    /// Creates a payload with the given list name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Client for `/api/v1/req/{account_id}/contact-lists`.
#[derive(Debug, Clone)]
pub struct ContactListsClient {
    executor: Arc<RequestExecutor>,
}

impl ResourceClient for ContactListsClient {
    const RESOURCE: &'static str = "contact-lists";

    fn executor(&self) -> &RequestExecutor {
        &self.executor
    }
}

impl ContactListsClient {
    /// Creates a contact lists client over a shared executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Lists contact lists, optionally paginated.
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

    /// Fetches one contact list.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get(&self, account_id: u64, list_id: u64) -> Result<Value, TextflyError> {
        self.fetch(
            HttpMethod::Get,
            &Self::member_path(account_id, list_id),
            RequestOptions::new(),
        )
        .await
    }

    /// Creates a contact list (`PUT`).
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn create(
        &self,
        account_id: u64,
        payload: &ContactListPayload,
    ) -> Result<Value, TextflyError> {
        self.fetch(
            HttpMethod::Put,
            &Self::collection_path(account_id),
            json_payload(payload)?,
        )
        .await
    }

    /// Updates a contact list (`POST`).
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the payload cannot be serialized or the
    /// request fails.
    pub async fn update<P>(
        &self,
        account_id: u64,
        list_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.fetch(
            HttpMethod::Post,
            &Self::member_path(account_id, list_id),
            json_payload(payload)?,
        )
        .await
    }

    /// Deletes a contact list. The API answers 204 with no body.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn delete(&self, account_id: u64, list_id: u64) -> Result<(), TextflyError> {
        self.dispatch(
            HttpMethod::Delete,
            &Self::member_path(account_id, list_id),
            RequestOptions::new(),
        )
        .await
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContactListsClient>();
};
