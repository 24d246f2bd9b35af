//! Chat-completions client for the hosted Groq model.
//!
//! Speaks the OpenAI-compatible wire format, so pointing
//! `GROQ_API_URL` at any compatible endpoint works unchanged.

use crate::config::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// System role content sent with every completion.
const SYSTEM_PROMPT: &str = "You are a helpful product support assistant. \
    Always respond in the language requested by the user.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Parse the configured chat-completions endpoint.
///
/// Called once when the service decides between live and canned answers;
/// a URL that does not parse rules out live mode.
pub fn chat_endpoint(config: &Config) -> Result<reqwest::Url> {
    reqwest::Url::parse(&config.groq_api_url)
        .with_context(|| format!("Invalid chat completions URL: {}", config.groq_api_url))
}

/// Ask the hosted model for a single answer to an assembled prompt.
///
/// Returns the first choice's content with surrounding whitespace
/// stripped. One attempt per call; retry policy belongs to the caller.
pub async fn generate_answer(
    client: &reqwest::Client,
    config: &Config,
    prompt: &str,
) -> Result<String> {
    let request = ChatRequest {
        model: config.groq_model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            },
        ],
        max_tokens: config.answer_max_tokens,
        temperature: config.answer_temperature,
    };

    let api_key = config.groq_api_key.as_deref().unwrap_or_default();

    let response = client
        .post(&config.groq_api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .context("Failed to send request to chat completions API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!("Chat completions API error ({}): {}", status, body);
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .context("Failed to parse chat completions response")?;

    let answer = chat_response
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .context("Chat completions response contained no choices")?;

    Ok(answer)
}
