//! The [`TextflyClient`] facade.
//!
//! The facade owns one [`RequestExecutor`] and one client per resource
//! family, all sharing the executor through an [`Arc`]. Every operation is
//! reachable two ways: grouped (`client.contacts().list(..)`) and flattened
//! (`client.get_contacts(..)`). Both go through the same code path.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ReqwestTransport, RequestExecutor, TextflyError, Transport};
use crate::config::{ApiKey, BaseUrl, TextflyConfig};
use crate::error::ConfigError;
use crate::rest::resources::{
    ContactListMembershipsClient, ContactListPayload, ContactListsClient, ContactsClient,
    ScheduledMessagesClient,
};

/// Client for the Textfly API.
///
/// # Thread Safety
///
/// `TextflyClient` is `Send + Sync` and cheap to clone; clones share the
/// same executor and transport.
///
/// # Example
///
/// ```rust,ignore
/// use textfly_sdk::TextflyClient;
///
/// let client = TextflyClient::from_credentials("https://api.textfly.example", "my-api-key")?;
///
/// // Grouped
/// let page = client.contacts().list(42, Some(2), Some(50)).await?;
///
/// // Flattened
/// let same = client.get_contacts(42, Some(2), Some(50)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TextflyClient {
    executor: Arc<RequestExecutor>,
    contacts: ContactsClient,
    contact_lists: ContactListsClient,
    contact_list_memberships: ContactListMembershipsClient,
    scheduled_messages: ScheduledMessagesClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TextflyClient>();
};

impl TextflyClient {
    /// Creates a client that talks to the API over [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportBuild`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &TextflyConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from a base URL and an API key with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL or key is invalid, or if the HTTP
    /// client cannot be initialized.
    pub fn from_credentials(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = TextflyConfig::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_key(ApiKey::new(api_key)?)
            .build()?;
        Self::new(&config)
    }

    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(config: &TextflyConfig, transport: Arc<dyn Transport>) -> Self {
        let executor = Arc::new(RequestExecutor::new(config, transport));

        Self {
            contacts: ContactsClient::new(Arc::clone(&executor)),
            contact_lists: ContactListsClient::new(Arc::clone(&executor)),
            contact_list_memberships: ContactListMembershipsClient::new(Arc::clone(&executor)),
            scheduled_messages: ScheduledMessagesClient::new(Arc::clone(&executor)),
            executor,
        }
    }

    /// Returns the shared executor, for requests no resource client covers.
    #[must_use]
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Returns the contacts client.
    #[must_use]
    pub const fn contacts(&self) -> &ContactsClient {
        &self.contacts
    }

    /// Returns the contact lists client.
    #[must_use]
    pub const fn contact_lists(&self) -> &ContactListsClient {
        &self.contact_lists
    }

    /// Returns the contact list memberships client.
    #[must_use]
    pub const fn contact_list_memberships(&self) -> &ContactListMembershipsClient {
        &self.contact_list_memberships
    }

    /// Returns the scheduled messages client.
    #[must_use]
    pub const fn scheduled_messages(&self) -> &ScheduledMessagesClient {
        &self.scheduled_messages
    }

    // Flattened surface. Each method forwards to the grouped client.

    /// See [`ContactsClient::list`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get_contacts(
        &self,
        account_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value, TextflyError> {
        self.contacts.list(account_id, page, per_page).await
    }

    /// See [`ContactsClient::get`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get_contact(&self, account_id: u64, contact_id: u64) -> Result<Value, TextflyError> {
        self.contacts.get(account_id, contact_id).await
    }

    /// See [`ContactsClient::find_by_phone`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn find_contact_by_phone(
        &self,
        account_id: u64,
        phone: &str,
    ) -> Result<Value, TextflyError> {
        self.contacts.find_by_phone(account_id, phone).await
    }

    /// See [`ContactsClient::upsert`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn create_contact<P>(&self, account_id: u64, payload: &P) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.contacts.upsert(account_id, payload).await
    }

    /// See [`ContactsClient::update`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn update_contact<P>(
        &self,
        account_id: u64,
        contact_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.contacts.update(account_id, contact_id, payload).await
    }

    /// See [`ContactsClient::delete`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn delete_contact(
        &self,
        account_id: u64,
        contact_id: u64,
    ) -> Result<Value, TextflyError> {
        self.contacts.delete(account_id, contact_id).await
    }

    /// See [`ContactListsClient::list`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get_contact_lists(
        &self,
        account_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value, TextflyError> {
        self.contact_lists.list(account_id, page, per_page).await
    }

    /// See [`ContactListsClient::get`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get_contact_list(&self, account_id: u64, list_id: u64) -> Result<Value, TextflyError> {
        self.contact_lists.get(account_id, list_id).await
    }

    /// See [`ContactListsClient::create`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn create_contact_list(
        &self,
        account_id: u64,
        payload: &ContactListPayload,
    ) -> Result<Value, TextflyError> {
        self.contact_lists.create(account_id, payload).await
    }

    /// See [`ContactListsClient::update`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn update_contact_list<P>(
        &self,
        account_id: u64,
        list_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.contact_lists.update(account_id, list_id, payload).await
    }

    /// See [`ContactListsClient::delete`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn delete_contact_list(&self, account_id: u64, list_id: u64) -> Result<(), TextflyError> {
        self.contact_lists.delete(account_id, list_id).await
    }

    /// See [`ContactListMembershipsClient::list`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get_contact_list_members(
        &self,
        account_id: u64,
        list_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value, TextflyError> {
        self.contact_list_memberships
            .list(account_id, list_id, page, per_page)
            .await
    }

    /// See [`ContactListMembershipsClient::attach`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn attach_contact_to_list(
        &self,
        account_id: u64,
        contact_id: u64,
        list_id: u64,
    ) -> Result<Value, TextflyError> {
        self.contact_list_memberships
            .attach(account_id, contact_id, list_id)
            .await
    }

    /// See [`ContactListMembershipsClient::detach`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn detach_contact_from_list(
        &self,
        account_id: u64,
        list_id: u64,
        contact_id: u64,
    ) -> Result<(), TextflyError> {
        self.contact_list_memberships
            .detach(account_id, list_id, contact_id)
            .await
    }

    /// See [`ScheduledMessagesClient::list`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn get_scheduled_messages(
        &self,
        account_id: u64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Value, TextflyError> {
        self.scheduled_messages.list(account_id, page, per_page).await
    }

    /// See [`ScheduledMessagesClient::create`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn create_scheduled_message<P>(
        &self,
        account_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.scheduled_messages.create(account_id, payload).await
    }

    /// See [`ScheduledMessagesClient::update`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn update_scheduled_message<P>(
        &self,
        account_id: u64,
        message_id: u64,
        payload: &P,
    ) -> Result<Value, TextflyError>
    where
        P: Serialize + ?Sized,
    {
        self.scheduled_messages
            .update(account_id, message_id, payload)
            .await
    }

    /// See [`ScheduledMessagesClient::delete`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn delete_scheduled_message(
        &self,
        account_id: u64,
        message_id: u64,
    ) -> Result<(), TextflyError> {
        self.scheduled_messages.delete(account_id, message_id).await
    }

    /// See [`ScheduledMessagesClient::send`].
    ///
    /// # Errors
    ///
    /// Returns [`TextflyError`] if the request fails.
    pub async fn send_scheduled_message(
        &self,
        account_id: u64,
        message_id: u64,
    ) -> Result<Option<Value>, TextflyError> {
        self.scheduled_messages.send(account_id, message_id).await
    }
}
