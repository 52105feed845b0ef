//! Tests for request construction and content extraction.

use openrouter_client::requests::{build_chat_request, extract_content};
use openrouter_client::{ChatMessage, ChatResponse, OpenRouterError, Role};
use serde_json::json;

fn parse_response(value: serde_json::Value) -> ChatResponse {
    serde_json::from_value(value).expect("Valid response JSON")
}

#[test]
fn test_request_uses_given_model() {
    let request = build_chat_request(&[ChatMessage::user("Hello")], "anthropic/claude-3-opus")
        .expect("Valid request");

    assert_eq!(request.model(), "anthropic/claude-3-opus");
}

#[test]
fn test_request_forwards_conversation_verbatim() {
    let messages = vec![
        ChatMessage::system("You are a helpful assistant."),
        ChatMessage::user("Hello"),
        ChatMessage::assistant("Hi there"),
    ];

    let request =
        build_chat_request(&messages, "openai/gpt-3.5-turbo").expect("Valid request");

    assert_eq!(request.messages(), &messages);
}

#[test]
fn test_single_user_message_matches_wrapped_prompt() {
    // complete() wraps the prompt as one user message; the request shape
    // must be identical to the explicit chat() form.
    let from_prompt = build_chat_request(
        &[ChatMessage::user("Hello, world!")],
        "openai/gpt-3.5-turbo",
    )
    .expect("Valid request");

    let from_chat = build_chat_request(
        &[ChatMessage::new(Role::User, "Hello, world!")],
        "openai/gpt-3.5-turbo",
    )
    .expect("Valid request");

    assert_eq!(
        serde_json::to_value(&from_prompt).expect("Serializable request"),
        serde_json::to_value(&from_chat).expect("Serializable request"),
    );
}

#[test]
fn test_extract_returns_first_choice_content() {
    let response = parse_response(json!({
        "choices": [{"message": {"role": "assistant", "content": "X"}}]
    }));

    let content = extract_content(&response).expect("Content present");
    assert_eq!(content, "X");
}

#[test]
fn test_extract_ignores_later_choices() {
    let response = parse_response(json!({
        "choices": [
            {"message": {"role": "assistant", "content": "first"}},
            {"message": {"role": "assistant", "content": "second"}}
        ]
    }));

    let content = extract_content(&response).expect("Content present");
    assert_eq!(content, "first");
}

#[test]
fn test_extract_fails_on_no_choices() {
    let response = parse_response(json!({"choices": []}));

    let result = extract_content(&response);
    assert!(matches!(result, Err(OpenRouterError::EmptyResponse)));
}

#[test]
fn test_extract_fails_on_absent_content() {
    let response = parse_response(json!({
        "choices": [{"message": {}}]
    }));

    let result = extract_content(&response);
    assert!(matches!(result, Err(OpenRouterError::EmptyResponse)));
}

#[test]
fn test_extract_fails_on_empty_content() {
    let response = parse_response(json!({
        "choices": [{"message": {"role": "assistant", "content": ""}}]
    }));

    let result = extract_content(&response);
    assert!(matches!(result, Err(OpenRouterError::EmptyResponse)));
}
