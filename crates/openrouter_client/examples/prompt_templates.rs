//! Reusable prompt templates.
//!
//! Run with: cargo run --example prompt_templates

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

fn review_prompt(product: &str, review: &str) -> String {
    format!(
        "Review this {product} review: \"{review}\"\n\nExtract and return:\n- Rating (1-5)\n- Sentiment (positive/negative/neutral)\n- Key points (3-5 bullet points)"
    )
}

fn email_prompt(recipient: &str, topic: &str, tone: &str) -> String {
    format!("Write a {tone} email to {recipient} about {topic}. Keep it professional and concise.")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    let review =
        "Great battery life, fast performance, but the screen could be brighter. Overall satisfied.";
    let analysis = client.complete(&review_prompt("laptop", review), None).await?;
    println!("Review Analysis:");
    println!("{}", analysis);

    println!("\n{}\n", "=".repeat(60));

    let email = client
        .complete(&email_prompt("John", "project update", "friendly"), None)
        .await?;
    println!("Generated Email:");
    println!("{}", email);

    Ok(())
}
