//! OpenAI client configuration.

use std::time::Duration;

use sidekick_config::ProviderConfig;

/// Endpoint, model and timeouts. The API key travels with each request.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::from_provider(&ProviderConfig::default())
    }
}

impl OpenAiConfig {
    pub fn from_provider(provider: &ProviderConfig) -> Self {
        Self {
            base_url: provider.base_url.clone(),
            model: provider.model.clone(),
            timeout: Duration::from_secs(u64::from(provider.timeout_secs)),
            connect_timeout: Duration::from_secs(u64::from(provider.connect_timeout_secs)),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
