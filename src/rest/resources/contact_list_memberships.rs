//! Contact list memberships (`contact-list-join`).
//!
//! Attaching and detaching contacts to lists goes through a join resource
//! rather than through the lists themselves.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RequestExecutor, RequestOptions, TextflyError};
use crate::rest::resource::{json_payload, pagination, ResourceClient};

/// Body of an attach request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPayload {
    /// The contact to attach.
    pub contact_id: u64,
    /// The list the contact joins.
    pub contact_list_id: u64,
}

/// Client for `/api/v1/req/{account_id}/contact-list-join`.
#[derive(Debug, Clone)]
pub struct ContactListMembershipsClient {
    executor: Arc<RequestExecutor>,
}

impl ResourceClient for ContactListMembershipsClient {
    const RESOURCE: &'static str = "contact-list-join";

    fn executor(&self) -> &RequestExecutor {
        &self.executor
    }
}

impl ContactListMembershipsClient {
    /// Creates a memberships client over a shared executor.
    #[must_use]
    pub const fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Lists the contacts attached to a list, optionally paginated.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn list(
        &self,
        account_id: u64,
        list_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value, TextflyError> {
        self.fetch(
            HttpMethod::Get,
            &Self::member_path(account_id, list_id),
            pagination(page, per_page),
        )
        .await
    }

    /// Attaches a contact to a list.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn attach(
        &self,
        account_id: u64,
        contact_id: u64,
        list_id: u64,
    ) -> Result<Value, TextflyError> {
        let payload = MembershipPayload {
            contact_id,
            contact_list_id: list_id,
        };
        self.fetch(
            HttpMethod::Put,
            &Self::collection_path(account_id),
            json_payload(&payload)?,
        )
        .await
    }

    /// Detaches a contact from a list.
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn detach(
        &self,
        account_id: u64,
        list_id: u64,
        contact_id: u64,
    ) -> Result<(), TextflyError> {
        let path = format!("{}/{contact_id}", Self::member_path(account_id, list_id));
        self.dispatch(HttpMethod::Delete, &path, RequestOptions::new())
            .await
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContactListMembershipsClient>();
};
