//! Session data types: turns, derived metrics, status summary, errors.

use sidekick_config::{AgentRole, Capability};

use crate::{Message, Role, TokenUsage};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl From<TurnRole> for Role {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        }
    }
}

/// One entry of the conversation log. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    role: TurnRole,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> TurnRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn to_message(&self) -> Message {
        Message::new(self.role.into(), self.content.clone())
    }
}

/// Turn counts derived from the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    pub total_turns: usize,
    pub user_turns: usize,
    pub assistant_turns: usize,
}

/// Everything the front end shows in its status panel.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub name: String,
    pub role: AgentRole,
    pub creativity: f64,
    pub active_capabilities: Vec<Capability>,
    pub configured: bool,
    pub metrics: SessionMetrics,
    pub usage: TokenUsage,
    pub completed_calls: u64,
    /// Message of the most recent failed request, until the next success or reset.
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no API key configured")]
    NotConfigured,
    #[error("message is empty")]
    EmptyTurn,
    #[error("{0}")]
    CompletionRequestFailed(String),
}
