//! HTTP behavior of the client against a mock Nomi.ai server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nomi_client::{Error, NomiClient};

fn client(server: &MockServer) -> NomiClient {
    NomiClient::builder()
        .base_url(server.uri())
        .api_key("test-api-key")
        .build()
        .unwrap()
}

fn nomis_body() -> serde_json::Value {
    json!({
        "nomis": [
            {"uuid": "test-uuid-1", "name": "John", "gender": "male",
             "created": "2024-01-01T12:00:00Z", "relationshipType": "Friend"},
            {"uuid": "test-uuid-2", "name": "Alice", "gender": "female",
             "created": "2024-01-02T12:00:00Z", "relationshipType": "Mentor"}
        ]
    })
}

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nomis"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nomis_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).nomis().list().await.unwrap();
    assert_eq!(response.nomis.len(), 2);
    assert_eq!(response.nomis[1].relationship_type, "Mentor");
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rooms": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = NomiClient::builder()
        .base_url(format!("{}/v1", server.uri()))
        .api_key("test-api-key")
        .build()
        .unwrap();
    let response = client.rooms().list().await.unwrap();
    assert!(response.rooms.is_empty());
}

#[tokio::test]
async fn test_find_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nomis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nomis_body()))
        .mount(&server)
        .await;

    let client = client(&server);
    let nomi = client.nomis().find_by_name("john").await.unwrap();
    assert_eq!(nomi.uuid, "test-uuid-1");

    let err = client.nomis().find_by_name("Bob").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(ref name) if name == "Bob"));
}

#[tokio::test]
async fn test_find_by_name_surfaces_listing_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nomis"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server)
        .nomis()
        .find_by_name("john")
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_get_not_found_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nomis/invalid-uuid"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Nomi not found"})))
        .mount(&server)
        .await;

    let err = client(&server).nomis().get("invalid-uuid").await.unwrap_err();
    assert!(err.is_status());
    assert_eq!(err.to_string(), "404 Not Found");
}

#[tokio::test]
async fn test_non_200_success_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nomis/test-uuid"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"uuid": "test-uuid"})))
        .mount(&server)
        .await;

    let err = client(&server).nomis().get("test-uuid").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(201));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client(&server).rooms().list().await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_chat_posts_message_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/nomis/test-uuid/chat"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_json(json!({"messageText": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentMessage": {"uuid": "msg-1", "text": "Hello", "sent": "2024-01-01T12:00:00Z"},
            "replyMessage": {"uuid": "msg-2", "text": "Test response", "sent": "2024-01-01T12:00:01Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .nomis()
        .chat("test-uuid", "Hello")
        .await
        .unwrap();
    assert_eq!(response.reply_message.text, "Test response");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let client = NomiClient::builder()
        .base_url("http://127.0.0.1:9")
        .api_key("test-api-key")
        .build()
        .unwrap();

    let err = client.nomis().list().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_requests_carry_fixed_user_agent() {
    let server = MockServer::start().await;
    let agent = format!("nomi-client/{}", env!("CARGO_PKG_VERSION"));
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .and(header("user-agent", agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rooms": []})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).rooms().list().await.unwrap();
}
