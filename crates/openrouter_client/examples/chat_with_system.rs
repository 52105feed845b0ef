//! Conversation with a system prompt.
//!
//! Run with: cargo run --example chat_with_system

use openrouter_client::{ChatMessage, OpenRouterClient, OpenRouterConfig};

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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = OpenRouterConfig::builder()
        .api_key(api_key_from_env())
        .default_model("openai/gpt-4")
        .build()?;
    let client = OpenRouterClient::new(config);

    let messages = vec![
        ChatMessage::system("You are a helpful assistant."),
        ChatMessage::user("What is Rust?"),
    ];

    let response = client.chat(&messages, None).await?;
    println!("{}", response);

    Ok(())
}
