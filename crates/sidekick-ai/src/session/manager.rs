//! Session struct and conversation state management.

use chrono::NaiveDate;
use sidekick_common::SessionId;
use sidekick_config::AgentConfig;
use tracing::{debug, info};

use crate::prompt::build_system_prompt;
use crate::token_tracker::TokenTracker;
use crate::{CompletionRequest, Credential, Message, Role};

use super::types::{SessionMetrics, SessionSummary, Turn, TurnRole};

/// A single chat session: persona, credential and conversation log.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) agent: AgentConfig,
    /// Last non-empty credential supplied. Never cleared once set.
    pub(super) credential: Option<Credential>,
    /// Conversation log, in submission order.
    pub(super) turns: Vec<Turn>,
    pub(super) tracker: TokenTracker,
    pub(super) last_error: Option<String>,
}

impl Session {
    pub fn new(agent: AgentConfig) -> Self {
        let id = SessionId::new();
        info!(session = %id.short(), "session started");
        Self {
            id,
            agent,
            credential: None,
            turns: Vec::new(),
            tracker: TokenTracker::new(),
            last_error: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Store the credential and persona for subsequent turns.
    pub fn configure(&mut self, credential: &str, agent: AgentConfig) {
        self.set_credential(credential);
        self.set_agent_config(agent);
    }

    /// Store a credential. A blank value is ignored, so once configured
    /// the session stays configured with the previous secret.
    pub fn set_credential(&mut self, credential: &str) {
        match Credential::new(credential) {
            Some(credential) => {
                if self.credential.is_none() {
                    info!(session = %self.id.short(), "credential configured");
                }
                self.credential = Some(credential);
            }
            None => {
                debug!(session = %self.id.short(), "blank credential ignored");
            }
        }
    }

    /// Replace the persona wholesale. Applies from the next turn on.
    pub fn set_agent_config(&mut self, agent: AgentConfig) {
        self.agent = agent;
    }

    pub fn agent_config(&self) -> &AgentConfig {
        &self.agent
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    /// The conversation log.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Empty the conversation log. Usage counters and the last error go with it.
    pub fn reset(&mut self) {
        debug!(session = %self.id.short(), cleared = self.turns.len(), "conversation reset");
        self.turns.clear();
        self.tracker.reset();
        self.last_error = None;
    }

    pub fn metrics(&self) -> SessionMetrics {
        let user_turns = self
            .turns
            .iter()
            .filter(|t| t.role() == TurnRole::User)
            .count();
        let assistant_turns = self
            .turns
            .iter()
            .filter(|t| t.role() == TurnRole::Assistant)
            .count();
        SessionMetrics {
            total_turns: self.turns.len(),
            user_turns,
            assistant_turns,
        }
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            name: self.agent.name.clone(),
            role: self.agent.role,
            creativity: self.agent.creativity,
            active_capabilities: self.agent.capabilities.active(),
            configured: self.is_configured(),
            metrics: self.metrics(),
            usage: *self.tracker.total(),
            completed_calls: self.tracker.call_count(),
            last_error: self.last_error.clone(),
        }
    }

    /// System instruction followed by the whole log.
    pub(crate) fn build_messages(&self, today: NaiveDate) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.turns.len() + 1);
        msgs.push(Message::new(
            Role::System,
            build_system_prompt(&self.agent, today),
        ));
        msgs.extend(self.turns.iter().map(Turn::to_message));
        msgs
    }

    pub(crate) fn build_request(&self, api_key: Credential, today: NaiveDate) -> CompletionRequest {
        CompletionRequest {
            api_key,
            messages: self.build_messages(today),
            temperature: self.agent.creativity,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}
