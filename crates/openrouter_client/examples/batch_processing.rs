//! Parallel fan-out over independent prompts.
//!
//! The client spawns no background work of its own; concurrency is a
//! caller pattern layered on top of independent calls.
//!
//! Run with: cargo run --example batch_processing

use futures::future::join_all;
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
async fn main() {
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    let prompts = ["Hello", "How are you?", "What is Rust?"];

    println!("Processing {} prompts in parallel...\n", prompts.len());

    let responses = join_all(prompts.iter().map(|prompt| client.complete(prompt, None))).await;

    for (prompt, response) in prompts.iter().zip(responses) {
        println!("Q: {}", prompt);
        match response {
            Ok(answer) => println!("A: {}\n", answer),
            Err(e) => println!("A: (failed: {})\n", e),
        }
    }
}
