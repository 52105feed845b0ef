//! Truncating a long conversation while keeping the system prompt.
//!
//! Run with: cargo run --example context_management

use openrouter_client::{ChatMessage, OpenRouterClient, OpenRouterConfig, Role};

fn api_key_from_env() -> String {
    dotenvy::dotenv().ok();
    match std::env::var("OPENROUTER_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: OPENROUTER_API_KEY environment variable is not set");
            std::process::exit(1);
        }
    }
}

/// Keeps the system message (if any) plus the most recent exchanges.
fn truncate_conversation(messages: &[ChatMessage], max_messages: usize) -> Vec<ChatMessage> {
    let system = messages.iter().find(|m| m.role == Role::System);
    let others: Vec<&ChatMessage> = messages.iter().filter(|m| m.role != Role::System).collect();

    let recent = &others[others.len().saturating_sub(max_messages)..];

    system
        .into_iter()
        .chain(recent.iter().copied())
        .cloned()
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    let mut conversation = vec![ChatMessage::system("You are a helpful assistant.")];

    // Grow a conversation turn by turn.
    for i in 1..=5 {
        conversation.push(ChatMessage::user(format!("Question {}: what is {} + {}?", i, i, i)));
        let response = client.chat(&conversation, None).await?;
        conversation.push(ChatMessage::assistant(response));
    }

    println!("Full conversation has {} messages\n", conversation.len());

    // Keep only the last 4 non-system messages.
    let truncated = truncate_conversation(&conversation, 4);
    println!("Truncated conversation has {} messages", truncated.len());
    println!("Last messages:");
    for message in truncated.iter().rev().take(3).rev() {
        let preview: String = message.content.chars().take(50).collect();
        println!("  {}: {}...", message.role.as_str(), preview);
    }

    Ok(())
}
