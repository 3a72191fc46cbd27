//! Anthropic Messages API client — exactly one request, one response,
//! per finalize. No streaming, no batching, no automatic retry.

use base64::{engine::general_purpose::STANDARD, Engine};

use super::prompts::ASSESSMENT_PROMPT;
use crate::capture::CapturedFrame;
use crate::config::Config;
use crate::controller::Submitter;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response contained no text content")]
    MalformedResponse,
}

/// Client for the hosted multimodal completion API.
///
/// Model, credential, and token budget are resolved once at startup
/// and fixed for the lifetime of the process.
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }
}

impl Submitter for AnthropicClient {
    async fn submit(&self, frames: &[CapturedFrame]) -> Result<String, SubmitError> {
        let body = build_request_body(&self.model, self.max_tokens, frames);

        log::info!("[LLM] Model: {} — {} image(s)", self.model, frames.len());
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Api { status, body });
        }

        let body: serde_json::Value = response.json().await?;
        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        // First text segment of the response; everything else is malformed.
        body["content"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(SubmitError::MalformedResponse)
    }
}

/// Builds the request body: the fixed instruction block first, then each
/// frame in accumulation order as an inline base64 PNG attachment.
///
/// Pure function — unit testable without network.
pub fn build_request_body(
    model: &str,
    max_tokens: u32,
    frames: &[CapturedFrame],
) -> serde_json::Value {
    let mut content = vec![serde_json::json!({
        "type": "text",
        "text": ASSESSMENT_PROMPT,
    })];

    for frame in frames {
        content.push(serde_json::json!({
            "type": "image",
            "source": {
                "type": "base64",
                "media_type": "image/png",
                "data": STANDARD.encode(frame.as_bytes()),
            }
        }));
    }

    serde_json::json!({
        "model": model,
        "max_tokens": max_tokens,
        "messages": [{ "role": "user", "content": content }],
    })
}
