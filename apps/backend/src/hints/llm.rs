//! Hint client for OpenAI-compatible chat-completions endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{HintError, HintGenerator};

const SYSTEM_PROMPT: &str = "You are an assistant who helps users guess words by providing hints. \
Please provide a hint for the given word in a clear and concise manner.";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HintConfig {
    /// Full chat-completions URL.
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl HintConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: std::borrow::Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

fn build_request<'a>(model: &'a str, solution: &str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: [
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.into(),
            },
            ChatMessage {
                role: "user",
                content: format!("Give a hint for the word: {solution}").into(),
            },
        ],
    }
}

fn extract_hint(response: ChatResponse) -> Result<String, HintError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(HintError::EmptyResponse)
}

pub struct LlmHintClient {
    http: Client,
    config: HintConfig,
}

impl LlmHintClient {
    pub fn new(config: HintConfig) -> Result<Self, HintError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(HintError::from)?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl HintGenerator for LlmHintClient {
    async fn hint(&self, solution: &str) -> Result<String, HintError> {
        let body = build_request(&self.config.model, solution);
        let mut request = self.http.post(&self.config.api_url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Hint service returned an error status");
            return Err(HintError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let hint = extract_hint(parsed)?;
        debug!(model = %self.config.model, hint_len = hint.len(), "Hint generated");
        Ok(hint)
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
