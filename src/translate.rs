//! Text translation through a LibreTranslate-compatible endpoint.
//!
//! Translation is strictly best-effort here. Whatever goes wrong on the
//! wire, callers get usable text back, at worst in the wrong language.

use crate::config::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Source sentinel asking the translation server to detect the input
/// language itself.
pub const AUTO: &str = "auto";

/// LibreTranslate translation request body.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Translate `text` from `source` to `target`.
///
/// When `source` equals `target` the input is returned as-is without
/// touching the network. Any transport or API failure is logged and the
/// original text comes back unchanged; this function never fails.
pub async fn translate_text(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    source: &str,
    target: &str,
) -> String {
    if source == target {
        return text.to_string();
    }

    match request_translation(client, config, text, source, target).await {
        Ok(translated) => {
            debug!(
                "Translated {} chars from {} to {}",
                text.chars().count(),
                source,
                target
            );
            translated
        }
        Err(error) => {
            warn!(
                "Translation from {} to {} failed, keeping original text: {:#}",
                source, target, error
            );
            text.to_string()
        }
    }
}

async fn request_translation(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
    source: &str,
    target: &str,
) -> Result<String> {
    let request = TranslateRequest {
        q: text,
        source,
        target,
        format: "text",
        api_key: config.translate_api_key.as_deref(),
    };

    let response = client
        .post(&config.translate_api_url)
        .json(&request)
        .send()
        .await
        .context("Failed to send request to translation API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!("Translation API error ({}): {}", status, body);
    }

    let parsed: TranslateResponse = response
        .json()
        .await
        .context("Failed to parse translation API response")?;

    Ok(parsed.translated_text)
}
