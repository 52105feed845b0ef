//! Setting the default model at construction.
//!
//! Run with: cargo run --example custom_default_model

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
    // All requests use this model unless a call overrides it.
    let config = OpenRouterConfig::builder()
        .api_key(api_key_from_env())
        .default_model("anthropic/claude-3-opus")
        .build()?;
    let client = OpenRouterClient::new(config);

    let response = client.complete("Write a haiku about coding", None).await?;
    println!("{}", response);

    Ok(())
}
