//! Textfly resource clients.
//!
//! | Client | Resource segment |
//! |---|---|
//! | [`ContactsClient`] | `contacts` |
//! | [`ContactListsClient`] | `contact-lists` |
//! | [`ContactListMembershipsClient`] | `contact-list-join` |
//! | [`ScheduledMessagesClient`] | `scheduled-messages` |

mod contact_list_memberships;
mod contact_lists;
mod contacts;
mod scheduled_messages;

pub use contact_list_memberships::{ContactListMembershipsClient, MembershipPayload};
pub use contact_lists::{ContactListPayload, ContactListsClient};
pub use contacts::{ContactPayload, ContactsClient};
pub use scheduled_messages::ScheduledMessagesClient;
