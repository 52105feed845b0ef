//! Matching on client error variants.
//!
//! Run with: RUST_LOG=openrouter_client=debug cargo run --example error_handling

use openrouter_client::{OpenRouterClient, OpenRouterConfig, OpenRouterError};

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

fn report(result: Result<String, OpenRouterError>) {
    match result {
        Ok(response) => println!("Success: {}", response),
        Err(OpenRouterError::Api { status, message }) => {
            println!("API rejected the request (status {}): {}", status, message)
        }
        Err(OpenRouterError::Http(message)) => println!("Network failure: {}", message),
        Err(OpenRouterError::EmptyResponse) => println!("Model returned no content"),
        Err(e) => println!("Caught error: {}", e),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    println!("Example 1: Invalid model name");
    report(client.complete("Hello!", Some("invalid-model-name-12345")).await);

    println!("\n{}\n", "=".repeat(60));

    println!("Example 2: Invalid API key");
    let invalid_client = OpenRouterClient::new(OpenRouterConfig::new(
        "invalid-api-key-example-for-testing",
    ));
    report(invalid_client.complete("Hello!", None).await);

    println!("\n{}\n", "=".repeat(60));

    println!("Example 3: Successful request");
    report(client.complete("Say hello!", None).await);
}
