//! Tracking token usage and estimated cost via the raw response.
//!
//! `send` returns the whole response, usage included; `chat` discards
//! everything but the text.
//!
//! Run with: cargo run --example cost_tracking

use openrouter_client::{
    ChatMessage, ChatRequest, ChatUsage, OpenRouterClient, OpenRouterConfig,
    requests::extract_content,
};

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

// Price per 1M tokens (input, output); adjust to current OpenRouter rates.
const MODEL_PRICING: &[(&str, f64, f64)] = &[
    ("openai/gpt-3.5-turbo", 0.5, 1.5),
    ("openai/gpt-4", 30.0, 60.0),
    ("anthropic/claude-3-haiku", 0.25, 1.25),
    ("anthropic/claude-3-opus", 15.0, 75.0),
];

fn estimate_cost(model: &str, usage: &ChatUsage) -> f64 {
    let (input_price, output_price) = MODEL_PRICING
        .iter()
        .find(|(m, _, _)| *m == model)
        .map(|(_, input, output)| (*input, *output))
        .unwrap_or((0.5, 1.5));

    let prompt = usage.prompt_tokens.unwrap_or(0) as f64;
    let completion = usage.completion_tokens.unwrap_or(0) as f64;

    prompt / 1_000_000.0 * input_price + completion / 1_000_000.0 * output_price
}

async fn complete_with_tracking(
    client: &OpenRouterClient,
    prompt: &str,
    model: &str,
) -> anyhow::Result<(String, ChatUsage)> {
    let request = ChatRequest::builder()
        .model(model)
        .messages(vec![ChatMessage::user(prompt)])
        .build()?;

    let response = client.send(&request).await?;
    let content = extract_content(&response)?;
    let usage = response
        .usage
        .ok_or_else(|| anyhow::anyhow!("No usage information in response"))?;

    Ok((content, usage))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = OpenRouterClient::new(OpenRouterConfig::new(api_key_from_env()));

    println!("Example 1: Single request cost tracking\n");
    let model = "openai/gpt-3.5-turbo";
    let (content, usage) =
        complete_with_tracking(&client, "Explain quantum computing in simple terms", model).await?;

    let preview: String = content.chars().take(100).collect();
    println!("Response: {}...\n", preview);
    println!("Usage:");
    println!("  Prompt tokens: {}", usage.prompt_tokens.unwrap_or(0));
    println!("  Completion tokens: {}", usage.completion_tokens.unwrap_or(0));
    println!("  Total tokens: {}", usage.total_tokens.unwrap_or(0));
    println!("  Estimated cost: ${:.6}", estimate_cost(model, &usage));

    println!("\n{}\n", "=".repeat(60));

    println!("Example 2: Aggregate cost tracking\n");
    let prompts = ["Say hello", "What is Rust?", "Write a haiku about coding"];

    let mut total_tokens = 0;
    let mut total_cost = 0.0;
    for prompt in prompts {
        let (_, usage) = complete_with_tracking(&client, prompt, model).await?;
        let cost = estimate_cost(model, &usage);
        total_tokens += usage.total_tokens.unwrap_or(0);
        total_cost += cost;
        println!(
            "\"{}\": {} tokens, ${:.6}",
            prompt,
            usage.total_tokens.unwrap_or(0),
            cost
        );
    }

    println!("\nTotal: {} tokens, ${:.6}", total_tokens, total_cost);

    Ok(())
}
