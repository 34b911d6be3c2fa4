//! Resource clients for the Textfly REST API.
//!
//! Each resource family (contacts, contact lists, memberships, scheduled
//! messages) is a small client implementing [`ResourceClient`]. The clients
//! only decide the method, path and payload of each operation; request
//! execution and error translation happen once, in the shared
//! [`RequestExecutor`](crate::clients::RequestExecutor).
//!
//! # Result Shapes
//!
//! Operations differ in what an empty response body means, mirroring the
//! remote API's own contract:
//!
//! - list/get/create/update/attach and contact delete return a
//!   [`serde_json::Value`], an empty object when the body was empty
//! - scheduled message send returns `Option<Value>`
//! - contact list delete, membership detach and scheduled message delete
//!   return `()`

mod path;
mod resource;
pub mod resources;

pub use path::{account_path, encode_segment, API_PREFIX};
pub use resource::{json_payload, pagination, ResourceClient};
