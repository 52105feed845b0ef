//! Per-call model override.
//!
//! Run with: cargo run --example different_models

use openrouter_client::{OpenRouterClient, OpenRouterConfig};

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

    // Use Claude for this specific request; the configured default is untouched.
    let response = client
        .complete("Explain quantum computing", Some("anthropic/claude-3-opus"))
        .await?;
    println!("{}", response);

    Ok(())
}
