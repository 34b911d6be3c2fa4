//! # Textfly Rust SDK
//!
//! A Rust SDK for the Textfly SMS and contact management API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TextflyConfig`] and [`TextflyConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - Account-scoped clients for contacts, contact lists, list memberships and
//!   scheduled messages
//! - A single request pipeline with bearer authentication, JSON marshalling
//!   and typed errors, including rate-limit signaling
//! - A pluggable [`Transport`] so the HTTP layer can be swapped in tests
//!
//! ## Quick Start
//!
//! ```rust
//! use textfly_sdk::{ApiKey, BaseUrl, TextflyConfig};
//!
//! let config = TextflyConfig::builder()
//!     .base_url(BaseUrl::new("https://api.textfly.example").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use textfly_sdk::TextflyClient;
//! use textfly_sdk::rest::resources::{ContactListPayload, ContactPayload};
//!
//! let client = TextflyClient::new(&config)?;
//!
//! let contacts = client.contacts().list(42, Some(1), Some(25)).await?;
//!
//! let list = client
//!     .contact_lists()
//!     .create(42, &ContactListPayload::new("Welcome"))
//!     .await?;
//!
//! client.contact_list_memberships().attach(42, 7, 3).await?;
//!
//! // `None` when the API accepted the send without a body
//! let sent = client.scheduled_messages().send(42, 11).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`TextflyError`]:
//!
//! ```rust,ignore
//! use textfly_sdk::TextflyError;
//!
//! match client.get_contact(42, 7).await {
//!     Ok(contact) => println!("{contact}"),
//!     Err(TextflyError::RateLimited(e)) => println!("retry at {:?}", e.retry_at()),
//!     Err(e) => println!("{} ({})", e.message(), e.code()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **No hidden retries**: rate-limit hints are returned, never acted on
//! - **Thread-safe**: all clients are `Send + Sync`

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::TextflyClient;
pub use config::{ApiKey, BaseUrl, TextflyConfig, TextflyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP layer types
pub use clients::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, RateLimitError, ReqwestTransport,
    RequestExecutor, RequestOptions, TextflyError, Transport, TransportError,
};

// Re-export resource clients and payloads
pub use rest::resources::{
    ContactListMembershipsClient, ContactListPayload, ContactListsClient, ContactPayload,
    ContactsClient, MembershipPayload, ScheduledMessagesClient,
};
pub use rest::ResourceClient;
