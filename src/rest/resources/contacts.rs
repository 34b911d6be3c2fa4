//! Contacts resource.
//!
//! Contacts are created with an upsert (`PUT /contacts`) keyed by phone
//! number and partially updated with `POST /contacts/{id}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use textfly_sdk::rest::resources::ContactPayload;
//!
//! let contact = client
//!     .contacts()
//!     .upsert(42, &ContactPayload {
//!         phone: Some("5551234567".to_string()),
//!         first_name: Some("Ada".to_string()),
//!         optin: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RequestExecutor, RequestOptions, TextflyError};
use crate::rest::path::encode_segment;
use crate::rest::resource::{json_payload, pagination, ResourceClient};

/// Contact attributes accepted by the upsert and update operations.
///
/// All fields are optional so the same struct serves partial updates;
/// absent fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Phone number; identifies the contact on upsert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the contact opted in to receive messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optin: Option<bool>,

    /// Whether the contact accepted the terms of service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_tos: Option<bool>,
}

/// Client for `/api/v1/req/{account_id}/contacts`.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    executor: Arc<RequestExecutor>,
}

impl ResourceClient for ContactsClient {
    const RESOURCE: &'static str = "contacts";

    fn executor(&self) -> &RequestExecutor {
        &self.executor
    }
}

impl ContactsClient {
    /// Creates a contacts client over a shared executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Lists contacts, optionally paginated.
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

    /// Fetches one contact.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails (404 when unknown).
    pub async fn get(&self, account_id: u64, contact_id: u64) -> Result<Value, TextflyError> {
        self.fetch(
            HttpMethod::Get,
            &Self::member_path(account_id, contact_id),
            RequestOptions::new(),
        )
        .await
    }

    /// Looks up a contact by phone number.
    ///
    /// The phone number is percent-encoded into the path.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn find_by_phone(&self, account_id: u64, phone: &str) -> Result<Value, TextflyError> {
        let path = format!(
            "{}/phone/{}",
            Self::collection_path(account_id),
            encode_segment(phone)
        );
        self.fetch(HttpMethod::Get, &path, RequestOptions::new())
            .await
    }

    /// Creates or updates a contact from its full attributes.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the payload cannot be serialized or the
    /// request fails (422 on validation errors).
    pub async fn upsert<P>(&self, account_id: u64, payload: &P) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.fetch(
            HttpMethod::Put,
            &Self::collection_path(account_id),
            json_payload(payload)?,
        )
        .await
    }

    /// Partially updates a contact.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the payload cannot be serialized or the
    /// request fails.
    pub async fn update<P>(
        &self,
        account_id: u64,
        contact_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.fetch(
            HttpMethod::Post,
            &Self::member_path(account_id, contact_id),
            json_payload(payload)?,
        )
        .await
    }

    /// Deletes a contact and returns the API's message body.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn delete(&self, account_id: u64, contact_id: u64) -> Result<Value, TextflyError> {
        self.fetch(
            HttpMethod::Delete,
            &Self::member_path(account_id, contact_id),
            RequestOptions::new(),
        )
        .await
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContactsClient>();
};
