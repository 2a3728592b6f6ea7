//! Completion endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`).
    pub base_url: String,
    pub model: String,
    /// Total request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Environment variable read for the API key at start-up.
    pub api_key_env: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}
