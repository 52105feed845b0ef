//! Caller-level retry with exponential backoff.
//!
//! The client never retries internally; transient failures are retried
//! here with tokio-retry2, jitter included.
//!
//! Run with: cargo run --example retry_logic

use openrouter_client::{OpenRouterClient, OpenRouterConfig, OpenRouterError};
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};

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

async fn complete_with_retry(
    client: &OpenRouterClient,
    prompt: &str,
) -> Result<String, OpenRouterError> {
    // 1s, 10s, 10s (capped), jittered.
    let strategy = ExponentialBackoff::from_millis(10)
        .factor(100)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(3);

    Retry::spawn(strategy, || async {
        client.complete(prompt, None).await.map_err(|e| {
            eprintln!("Attempt failed: {}", e);
            match e {
                // Auth and bad-request failures won't improve on retry.
                OpenRouterError::Api { status, .. } if status < 500 && status != 429 => {
                    RetryError::permanent(e)
                }
                _ => RetryError::transient(e),
            }
        })
    })
    .await
}

#[tokio::main]
async fn main() {
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    match complete_with_retry(&client, "Say hello!").await {
        Ok(response) => println!("Response: {}", response),
        Err(e) => eprintln!("Failed after retries: {}", e),
    }
}
