//! Multi-turn conversation with prior assistant context.
//!
//! Run with: cargo run --example multi_turn

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
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    let messages = vec![
        ChatMessage::system("You are a helpful assistant."),
        ChatMessage::user("What is Rust?"),
        ChatMessage::assistant("Rust is a systems programming language focused on safety..."),
        ChatMessage::user("Tell me more about its benefits."),
    ];

    let response = client.chat(&messages, None).await?;
    println!("{}", response);

    Ok(())
}
