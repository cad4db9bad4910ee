// src/services/openai.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, error};

/// Floor on the client-side timeout; model completions are slow and the
/// request must be allowed to run long.
pub const MIN_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("model request timed out")]
    Timeout,

    #[error("model provider returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("model request failed: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl OpenAIConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            env::var("OPENAI_API_KEY").map_err(|_| anyhow::anyhow!("OPENAI_API_KEY must be set"))?;
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com".to_string());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let max_tokens = env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);
        let temperature = env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);
        let timeout_secs = effective_timeout(
            env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MIN_TIMEOUT_SECS),
        );

        Ok(Self {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout_secs,
        })
    }
}

/// Requested timeouts below the floor are raised to it.
fn effective_timeout(requested: u64) -> u64 {
    requested.max(MIN_TIMEOUT_SECS)
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    total_tokens: u32,
}

/// Completion gateway for the model provider's chat-completions endpoint.
///
/// Stateless per call; one instance is shared across requests. Does not retry
/// internally: retry policy is the caller's concern, signalled through the
/// `retryable` flag on the error envelope.
#[derive(Debug)]
pub struct OpenAIService {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIService {
    pub fn new(config: OpenAIConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    /// Send one prompt and return the raw completion text.
    pub async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(
            model = %self.config.model,
            max_tokens = self.config.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Unknown(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            error!(status = %status, message = %message, "Chat completion request failed");
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Unknown(format!("undecodable provider response: {}", e))
                }
            })?;

        if let Some(usage) = &body.usage {
            debug!(tokens_used = usage.total_tokens, "Chat completion usage");
        }

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::Unknown("no choices in provider response".to_string()))?;

        debug!(response = %content, "Raw model response");

        Ok(content)
    }
}
