//! The per-turn request cycle.

use chrono::Local;
use tracing::{debug, warn};

use crate::AiClient;

use super::manager::Session;
use super::types::{SessionError, Turn};

impl Session {
    /// Append a user turn, ask `client` for a reply and append it.
    ///
    /// Nothing is recorded when the session is unconfigured or `text` is
    /// blank. On a failed request the user turn stays in the log without a
    /// reply and the collaborator's message is returned unchanged.
    pub async fn submit_turn(
        &mut self,
        client: &dyn AiClient,
        text: impl Into<String>,
    ) -> Result<String, SessionError> {
        let Some(credential) = self.credential.clone() else {
            warn!(session = %self.id.short(), "turn rejected: no credential");
            return Err(SessionError::NotConfigured);
        };

        let text = text.into();
        if text.trim().is_empty() {
            return Err(SessionError::EmptyTurn);
        }

        self.turns.push(Turn::user(text));
        let request = self.build_request(credential, Local::now().date_naive());

        debug!(
            session = %self.id.short(),
            turns = self.turns.len(),
            "requesting completion"
        );

        match client.send_message(&request).await {
            Ok(response) => {
                self.tracker.record(&response.usage);
                self.turns.push(Turn::assistant(response.content.clone()));
                self.last_error = None;
                Ok(response.content)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(session = %self.id.short(), error = %message, "completion request failed");
                self.last_error = Some(message.clone());
                Err(SessionError::CompletionRequestFailed(message))
            }
        }
    }
}
