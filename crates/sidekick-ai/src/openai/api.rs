//! AiClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, CompletionRequest};

use super::client::{error_detail, OpenAiClient};

#[async_trait]
impl AiClient for OpenAiClient {
    async fn send_message(&self, request: &CompletionRequest) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(request);

        debug!(
            model = %self.config.model,
            messages = request.messages.len(),
            temperature = request.temperature,
            "chat completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(request.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!(
                "HTTP {status}: {}",
                error_detail(&text)
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let parsed = self.parse_response(json)?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "chat completion response"
        );
        Ok(parsed)
    }
}

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}
