//! Few-shot classification via in-context examples.
//!
//! Run with: cargo run --example few_shot

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
        ChatMessage::system("You are a helpful assistant that learns from examples."),
        ChatMessage::user(
            "Example 1: \"happy\" -> positive\n\
             Example 2: \"sad\" -> negative\n\
             Example 3: \"angry\" -> negative\n\
             Now classify: \"excited\"",
        ),
    ];

    let response = client.chat(&messages, None).await?;
    println!("Classification: {}", response);

    Ok(())
}
