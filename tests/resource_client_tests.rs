//! Integration tests for the Textfly resource clients.
//!
//! These tests run the full stack (facade, resource client, executor and the
//! reqwest transport) against a local mock server and verify the method,
//! path, query, headers and body each operation puts on the wire.

use serde_json::json;
use textfly_sdk::{
    ApiKey, BaseUrl, ContactListPayload, ContactPayload, TextflyClient, TextflyConfig,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> TextflyClient {
    let config = TextflyConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new(API_KEY).unwrap())
        .build()
        .unwrap();
    TextflyClient::new(&config).unwrap()
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn test_contacts_list_sends_pagination_and_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/req/42/contacts"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "50"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let contacts = client.contacts().list(42, Some(2), Some(50)).await.unwrap();

    assert_eq!(contacts, json!({"data": [{"id": 1}]}));
}

#[tokio::test]
async fn test_contacts_list_without_pagination_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/req/42/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_contacts(42, None, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_contacts_list_with_only_per_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/req/42/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.contacts().list(42, None, Some(25)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("per_page=25"));
}

#[tokio::test]
async fn test_contact_get_and_find_by_phone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/req/42/contacts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/req/42/contacts/phone/5551234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_contact(42, 7).await.unwrap(), json!({"id": 7}));
    assert_eq!(
        client.find_contact_by_phone(42, "5551234567").await.unwrap(),
        json!({"id": 8})
    );
}

#[tokio::test]
async fn test_find_by_phone_encodes_plus_sign() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.contacts().find_by_phone(42, "+15551234567").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.path(),
        "/api/v1/req/42/contacts/phone/%2B15551234567"
    );
}

#[tokio::test]
async fn test_contact_upsert_uses_put_with_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/req/42/contacts"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "phone": "5551234567",
            "first_name": "Ada",
            "optin": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = ContactPayload {
        phone: Some("5551234567".to_string()),
        first_name: Some("Ada".to_string()),
        optin: Some(true),
        ..Default::default()
    };
    let contact = client.contacts().upsert(42, &payload).await.unwrap();

    assert_eq!(contact, json!({"id": 10}));
}

#[tokio::test]
async fn test_contact_update_uses_post_with_partial_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/req/42/contacts/7"))
        .and(body_json(json!({"last_name": "Hopper"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .update_contact(42, 7, &json!({"last_name": "Hopper"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_contact_delete_returns_message_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/req/42/contacts/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Contact deleted"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.contacts().delete(42, 7).await.unwrap();

    assert_eq!(result, json!({"message": "Contact deleted"}));
}

#[tokio::test]
async fn test_empty_body_is_coerced_to_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/req/42/contacts/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.delete_contact(42, 7).await.unwrap();

    assert_eq!(result, json!({}));
}

// ============================================================================
// Contact lists
// ============================================================================

#[tokio::test]
async fn test_contact_list_create_uses_put_with_name() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/req/7/contact-lists"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Welcome"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3, "name": "Welcome"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = client
        .contact_lists()
        .create(7, &ContactListPayload::new("Welcome"))
        .await
        .unwrap();

    assert_eq!(list, json!({"id": 3, "name": "Welcome"}));
}

#[tokio::test]
async fn test_contact_list_get_update_and_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/req/7/contact-lists"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/req/7/contact-lists/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/req/7/contact-lists/3"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "name": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_contact_lists(7, Some(1), None).await.unwrap();
    client.get_contact_list(7, 3).await.unwrap();
    let updated = client
        .update_contact_list(7, 3, &ContactListPayload::new("Renamed"))
        .await
        .unwrap();

    assert_eq!(updated["name"], "Renamed");
}

#[tokio::test]
async fn test_contact_list_delete_returns_unit() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/req/7/contact-lists/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.contact_lists().delete(7, 3).await.unwrap();
}

// ============================================================================
// Contact list memberships
// ============================================================================

#[tokio::test]
async fn test_attach_sends_contact_and_list_ids() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/req/3/contact-list-join"))
        .and(body_json(json!({"contact_id": 9, "contact_list_id": 21})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"attached": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .contact_list_memberships()
        .attach(3, 9, 21)
        .await
        .unwrap();

    assert_eq!(result, json!({"attached": true}));
}

#[tokio::test]
async fn test_membership_list_and_detach_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/req/9/contact-list-join/3"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/req/9/contact-list-join/3/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .get_contact_list_members(9, 3, None, Some(100))
        .await
        .unwrap();
    client.detach_contact_from_list(9, 3, 5).await.unwrap();
}

// ============================================================================
// Scheduled messages
// ============================================================================

#[tokio::test]
async fn test_send_with_empty_202_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/req/11/scheduled-messages/5/send"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.scheduled_messages().send(11, 5).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_send_with_body_returns_value() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/req/11/scheduled-messages/5/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.send_scheduled_message(11, 5).await.unwrap();

    assert_eq!(result, Some(json!({"status": "queued"})));
}

#[tokio::test]
async fn test_scheduled_message_create_update_delete_verbs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/req/11/scheduled-messages"))
        .and(body_json(json!({"body": "Hello", "send_at": "2026-01-01 09:00:00"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/req/11/scheduled-messages/5"))
        .and(body_json(json!({"body": "Hello again"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/req/11/scheduled-messages/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/req/11/scheduled-messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .create_scheduled_message(11, &json!({"body": "Hello", "send_at": "2026-01-01 09:00:00"}))
        .await
        .unwrap();
    client
        .update_scheduled_message(11, 5, &json!({"body": "Hello again"}))
        .await
        .unwrap();
    client.delete_scheduled_message(11, 5).await.unwrap();
    client.get_scheduled_messages(11, None, None).await.unwrap();
}
