//! Path building for account-scoped Textfly resources.
//!
//! Every resource lives under `/api/v1/req/{account_id}/{resource}`, where
//! the resource segment is hyphenated (`contact-lists`, `contact-list-join`,
//! `scheduled-messages`).
//!
//! # Example
//!
//! ```rust
//! use textfly_sdk::rest::{account_path, encode_segment};
//!
//! assert_eq!(account_path(42, "contacts"), "/api/v1/req/42/contacts");
//! assert_eq!(encode_segment("+1 555"), "%2B1%20555");
//! ```

/// Prefix shared by all account-scoped API paths.
pub const API_PREFIX: &str = "/api/v1/req";

/// Builds the path of `resource` within an account.
///
/// `resource` may contain further segments (`"contacts/7"`); it is appended
/// verbatim.
#[must_use]
pub fn account_path(account_id: u64, resource: &str) -> String {
    format!("{API_PREFIX}/{account_id}/{}", resource.trim_start_matches('/'))
}

/// Percent-encodes a caller-supplied value for use as a single path segment.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
