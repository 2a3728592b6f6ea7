//! Front-end state: maps prompt commands onto session operations.

use sidekick_ai::{AiClient, Session, SessionError};
use sidekick_common::Notice;
use tracing::{debug, info};

use crate::commands::Command;
use crate::render::{render_status, render_turn, HELP};

/// Something to show the user after handling a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    Notice(Notice),
}

/// The interactive chat front end around one session.
pub struct ChatApp {
    session: Session,
    client: Box<dyn AiClient>,
    /// Environment variable named in the not-configured hint.
    api_key_env: String,
    should_quit: bool,
}

impl ChatApp {
    pub fn new(session: Session, client: Box<dyn AiClient>, api_key_env: impl Into<String>) -> Self {
        Self {
            session,
            client,
            api_key_env: api_key_env.into(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether handling `command` will call the completion endpoint.
    pub fn will_request(&self, command: &Command) -> bool {
        match command {
            Command::Say(text) => self.session.is_configured() && !text.trim().is_empty(),
            _ => false,
        }
    }

    pub async fn handle(&mut self, command: Command) -> Vec<Output> {
        match command {
            Command::Say(text) => self.say(text).await,
            Command::Reset => {
                self.session.reset();
                vec![Output::Notice(Notice::info("Conversation cleared."))]
            }
            Command::Status => vec![Output::Text(render_status(&self.session.summary()))],
            Command::History => self.history(),
            Command::Help => vec![Output::Text(HELP.to_string())],
            Command::Key(secret) => {
                self.session.set_credential(&secret);
                vec![Output::Notice(Notice::success("API Key Configured"))]
            }
            Command::Name(name) => {
                let notice = Notice::success(format!("Name set to {name}"));
                self.update_agent(|agent| agent.name = name);
                vec![Output::Notice(notice)]
            }
            Command::Role(role) => {
                self.update_agent(|agent| agent.role = role);
                vec![Output::Notice(Notice::success(format!(
                    "Role set to {}",
                    role.label()
                )))]
            }
            Command::Creativity(value) => {
                self.update_agent(|agent| agent.creativity = value);
                vec![Output::Notice(Notice::success(format!(
                    "Creativity set to {value:.1}"
                )))]
            }
            Command::Enable(capability) => {
                self.update_agent(|agent| agent.capabilities.set(capability, true));
                vec![Output::Notice(Notice::success(format!(
                    "Enabled {}",
                    capability.label().to_lowercase()
                )))]
            }
            Command::Disable(capability) => {
                self.update_agent(|agent| agent.capabilities.set(capability, false));
                vec![Output::Notice(Notice::success(format!(
                    "Disabled {}",
                    capability.label().to_lowercase()
                )))]
            }
            Command::Quit => {
                info!(session = %self.session.id().short(), "session ended by user");
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    async fn say(&mut self, text: String) -> Vec<Output> {
        match self.session.submit_turn(self.client.as_ref(), text).await {
            Ok(_) => {
                let name = self.session.agent_config().name.clone();
                self.session
                    .turns()
                    .last()
                    .map(|turn| vec![Output::Text(render_turn(turn, &name))])
                    .unwrap_or_default()
            }
            Err(SessionError::NotConfigured) => vec![Output::Notice(Notice::error(format!(
                "Please configure your API key first: use /key <secret> or set {}.",
                self.api_key_env
            )))],
            Err(SessionError::EmptyTurn) => {
                vec![Output::Notice(Notice::warning("Nothing to send."))]
            }
            Err(SessionError::CompletionRequestFailed(message)) => {
                vec![Output::Notice(Notice::error(format!("Error: {message}")))]
            }
        }
    }

    fn history(&self) -> Vec<Output> {
        let turns = self.session.turns();
        if turns.is_empty() {
            return vec![Output::Notice(Notice::info("No messages yet."))];
        }
        let name = &self.session.agent_config().name;
        turns
            .iter()
            .map(|turn| Output::Text(render_turn(turn, name)))
            .collect()
    }

    /// Edit a copy of the persona and hand it back to the session whole.
    fn update_agent(&mut self, edit: impl FnOnce(&mut sidekick_config::AgentConfig)) {
        let mut agent = self.session.agent_config().clone();
        edit(&mut agent);
        debug!(?agent, "agent config updated");
        self.session.set_agent_config(agent);
    }
}
