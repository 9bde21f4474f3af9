//! Integration tests for the AI conversation client
//!
//! Runs the client against a local fake of the completion endpoint and
//! checks payload shaping and failure semantics.

use digiequity::ai::{AiClient, AiError, SYSTEM_PROMPT};
use digiequity::types::{ContentPart, Message, MessageContent, Role};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message(role: Role, content: MessageContent) -> Message {
    Message {
        id: "m".to_string(),
        role,
        content,
        timestamp: 0,
        liked: None,
        disliked: None,
        read: None,
        feedback: None,
    }
}

async fn completion_server(body: serde_json::Value, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/text/llm/"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> AiClient {
    AiClient::with_endpoint(format!("{}/text/llm/", server.uri()))
}

#[tokio::test]
async fn test_completion_text_is_returned() {
    let server = completion_server(json!({"completion": "Hello! How can I help?"}), 200).await;
    let client = client_for(&server);

    let reply = client
        .send_message(&[message(Role::User, MessageContent::text("hi"))])
        .await
        .unwrap();
    assert_eq!(reply, "Hello! How can I help?");
}

#[tokio::test]
async fn test_system_prompt_is_prepended_once() {
    let server = completion_server(json!({"completion": "ok"}), 200).await;
    let client = client_for(&server);

    client
        .send_message(&[
            message(Role::User, MessageContent::text("first")),
            message(Role::Assistant, MessageContent::text("reply")),
            message(Role::User, MessageContent::text("second")),
        ])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
    assert_eq!(messages[3]["content"], "second");
}

#[tokio::test]
async fn test_history_with_system_message_is_sent_unchanged() {
    let server = completion_server(json!({"completion": "ok"}), 200).await;
    let client = client_for(&server);

    client
        .send_message(&[
            message(Role::System, MessageContent::text("be terse")),
            message(Role::User, MessageContent::text("hi")),
        ])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "be terse");
}

#[tokio::test]
async fn test_image_parts_are_forwarded_in_structured_form() {
    let server = completion_server(json!({"completion": "ok"}), 200).await;
    let client = client_for(&server);

    client
        .send_message(&[message(
            Role::User,
            MessageContent::Parts(vec![
                ContentPart::Text {
                    text: "what does this show".to_string(),
                },
                ContentPart::Image {
                    image: "base64payload".to_string(),
                },
            ]),
        )])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let content = &body["messages"][1]["content"];
    assert_eq!(content[0]["type"], "text");
    assert_eq!(content[1]["type"], "image");
    assert_eq!(content[1]["image"], "base64payload");
}

#[tokio::test]
async fn test_non_2xx_status_is_an_endpoint_error() {
    let server = completion_server(json!({"error": "overloaded"}), 503).await;
    let client = client_for(&server);

    let err = client
        .send_message(&[message(Role::User, MessageContent::text("hi"))])
        .await
        .unwrap_err();
    match err {
        AiError::Endpoint { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected endpoint error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_completion_field_is_a_decode_error() {
    let server = completion_server(json!({"message": "wrong shape"}), 200).await;
    let client = client_for(&server);

    let err = client
        .send_message(&[message(Role::User, MessageContent::text("hi"))])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    // Nothing listens here.
    let client = AiClient::with_endpoint("http://127.0.0.1:9/text/llm/");
    let err = client
        .send_message(&[message(Role::User, MessageContent::text("hi"))])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Transport(_)));
}
