//! Minimal completion call.
//!
//! Run with: cargo run --example basic

use openrouter_client::{OpenRouterClient, OpenRouterConfig};

fn api_key_from_env() -> String {
    dotenvy::dotenv().ok();
    match std::env::var("OPENROUTER_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: OPENROUTER_API_KEY environment variable is not set");
            eprintln!("Please set it with: export OPENROUTER_API_KEY=\"your-api-key\"");
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    println!("Sending request to OpenRouter...\n");
    match client.complete("Say hello in a friendly way!", None).await {
        Ok(response) => println!("Response: {}", response),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
