//! Tests for the chat completions wire format.

use openrouter_core::{ChatMessage, ChatRequest, ChatResponse, Role};
use serde_json::json;

#[test]
fn test_default_request_serializes_to_model_and_messages_only() {
    let request = ChatRequest::builder()
        .model("openai/gpt-3.5-turbo")
        .messages(vec![ChatMessage::user("Hello")])
        .build()
        .expect("Valid request");

    let value = serde_json::to_value(&request).expect("Serializable request");
    assert_eq!(
        value,
        json!({
            "model": "openai/gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "Hello"}],
        })
    );
}

#[test]
fn test_roles_serialize_lowercase() {
    let messages = vec![
        ChatMessage::system("a"),
        ChatMessage::user("b"),
        ChatMessage::assistant("c"),
    ];

    let value = serde_json::to_value(&messages).expect("Serializable messages");
    let roles: Vec<&str> = value
        .as_array()
        .expect("Message array")
        .iter()
        .map(|m| m["role"].as_str().expect("Role string"))
        .collect();

    assert_eq!(roles, vec!["system", "user", "assistant"]);
}

#[test]
fn test_message_order_is_preserved() {
    let messages = vec![
        ChatMessage::system("You are a helpful assistant."),
        ChatMessage::user("Hello"),
        ChatMessage::assistant("Hi there"),
        ChatMessage::user("How are you?"),
    ];

    let request = ChatRequest::builder()
        .model("openai/gpt-3.5-turbo")
        .messages(messages.clone())
        .build()
        .expect("Valid request");

    let value = serde_json::to_value(&request).expect("Serializable request");
    let wire = value["messages"].as_array().expect("Message array");

    assert_eq!(wire.len(), messages.len());
    for (sent, original) in wire.iter().zip(&messages) {
        assert_eq!(sent["role"], original.role.as_str());
        assert_eq!(sent["content"], original.content.as_str());
    }
}

#[test]
fn test_sampling_fields_serialize_when_set() {
    let request = ChatRequest::builder()
        .model("openai/gpt-4")
        .messages(vec![ChatMessage::user("Hello")])
        .max_tokens(Some(256))
        .temperature(Some(0.5))
        .build()
        .expect("Valid request");

    let value = serde_json::to_value(&request).expect("Serializable request");
    assert_eq!(value["max_tokens"], 256);
    assert_eq!(value["temperature"], 0.5);
}

#[test]
fn test_response_with_content_parses() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{
            "message": {"role": "assistant", "content": "Hi"},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
    }))
    .expect("Valid response JSON");

    let choice = response.choices.first().expect("One choice");
    assert_eq!(choice.message.role, Some(Role::Assistant));
    assert_eq!(choice.message.content.as_deref(), Some("Hi"));
    assert_eq!(choice.finish_reason.as_deref(), Some("stop"));

    let usage = response.usage.expect("Usage reported");
    assert_eq!(usage.prompt_tokens, Some(5));
    assert_eq!(usage.completion_tokens, Some(2));
    assert_eq!(usage.total_tokens, Some(7));
}

#[test]
fn test_response_with_contentless_choice_parses() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {}}]
    }))
    .expect("Valid response JSON");

    let choice = response.choices.first().expect("One choice");
    assert!(choice.message.role.is_none());
    assert!(choice.message.content.is_none());
    assert!(choice.finish_reason.is_none());
}

#[test]
fn test_response_without_usage_parses() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": "Hi"}}]
    }))
    .expect("Valid response JSON");

    assert!(response.usage.is_none());
}
