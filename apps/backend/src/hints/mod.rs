//! Hint generation.
//!
//! The game only needs "given a word, return a hint or fail"; how the hint
//! is produced lives behind [`HintGenerator`].

use async_trait::async_trait;
use thiserror::Error;

pub mod llm;

pub use llm::{HintConfig, LlmHintClient};

/// User-facing message for every hint failure.
pub const MSG_HINT_FAILED: &str = "Failed to generate hint. Please try again later.";

#[derive(Debug, Error)]
pub enum HintError {
    #[error("hint generation is not configured")]
    Disabled,
    #[error("hint request timed out")]
    Timeout,
    #[error("hint request failed: {0}")]
    Request(String),
    #[error("hint service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("hint service returned no content")]
    EmptyResponse,
}

impl From<reqwest::Error> for HintError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HintError::Timeout
        } else {
            HintError::Request(err.to_string())
        }
    }
}

#[async_trait]
pub trait HintGenerator: Send + Sync {
    /// Produce a hint for `solution`. Must not reveal game state beyond the
    /// word itself.
    async fn hint(&self, solution: &str) -> Result<String, HintError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// Used when no hint endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledHints;

#[async_trait]
impl HintGenerator for DisabledHints {
    async fn hint(&self, _solution: &str) -> Result<String, HintError> {
        Err(HintError::Disabled)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
