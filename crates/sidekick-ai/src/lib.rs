//! AI engine for Sidekick.
//!
//! Provides:
//! - the `AiClient` trait every completion backend implements
//! - an OpenAI-compatible chat completions client
//! - persona-driven system prompt building
//! - the conversation `Session` controller
//! - token usage tracking

pub mod credential;
pub mod openai;
pub mod prompt;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use credential::Credential;
pub use openai::{OpenAiClient, OpenAiConfig};
pub use prompt::build_system_prompt;
pub use session::{Session, SessionError, SessionMetrics, SessionSummary, Turn, TurnRole};
pub use token_tracker::TokenTracker;

/// The completion collaborator: turns a prompt and history into reply text.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, request: &CompletionRequest) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Everything a backend needs for one completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub api_key: Credential,
    /// System instruction first, then the conversation in order.
    pub messages: Vec<Message>,
    /// Sampling temperature, taken from the agent's creativity setting.
    pub temperature: f64,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Request timed out")]
    Timeout,
}
