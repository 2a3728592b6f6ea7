//! Session behavior against stub completion backends.

use std::sync::Mutex;

use async_trait::async_trait;
use sidekick_config::{AgentConfig, AgentRole, Capabilities, Capability};

use super::*;
use crate::{AiClient, AiError, AiResponse, CompletionRequest, Role, TokenUsage};

/// Replies with a fixed text, or fails with a fixed API error, and records
/// every request it receives.
struct StubClient {
    outcome: Result<String, String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubClient {
    fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> CompletionRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl AiClient for StubClient {
    async fn send_message(&self, request: &CompletionRequest) -> Result<AiResponse, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(text) => Ok(AiResponse {
                content: text.clone(),
                usage: TokenUsage {
                    input_tokens: 7,
                    output_tokens: 2,
                },
            }),
            Err(message) => Err(AiError::ApiError(message.clone())),
        }
    }
}

fn configured_session() -> Session {
    let mut session = Session::default();
    session.configure("x", AgentConfig::default());
    session
}

#[tokio::test]
async fn hello_example() {
    let mut session = Session::default();
    session.configure(
        "x",
        AgentConfig::default()
            .with_name("Assistant")
            .with_role(AgentRole::GeneralAssistant)
            .with_capabilities(Capabilities::default())
            .with_creativity(0.7),
    );
    let client = StubClient::replying("Hello!");

    let reply = session.submit_turn(&client, "Hi").await.unwrap();

    assert_eq!(reply, "Hello!");
    assert_eq!(session.turns(), &[Turn::user("Hi"), Turn::assistant("Hello!")]);
    assert_eq!(
        session.metrics(),
        SessionMetrics {
            total_turns: 2,
            user_turns: 1,
            assistant_turns: 1,
        }
    );
}

#[tokio::test]
async fn successful_turns_alternate() {
    let mut session = configured_session();
    let client = StubClient::replying("ok");

    for n in 1..=5 {
        session.submit_turn(&client, format!("message {n}")).await.unwrap();
        assert_eq!(session.turns().len(), 2 * n);
    }

    for (i, turn) in session.turns().iter().enumerate() {
        let expected = if i % 2 == 0 {
            TurnRole::User
        } else {
            TurnRole::Assistant
        };
        assert_eq!(turn.role(), expected);
    }
    assert_eq!(session.turns()[4].content(), "message 3");
}

#[tokio::test]
async fn request_has_system_prompt_history_and_creativity() {
    let mut session = Session::default();
    session.configure(
        "sk-abc",
        AgentConfig::default()
            .with_name("Juniper")
            .with_creativity(0.2),
    );
    let client = StubClient::replying("first reply");
    session.submit_turn(&client, "first").await.unwrap();
    session.submit_turn(&client, "second").await.unwrap();

    let request = client.last_request();
    assert_eq!(request.api_key.expose(), "sk-abc");
    assert!((request.temperature - 0.2).abs() < f64::EPSILON);

    let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::System, Role::User, Role::Assistant, Role::User]
    );
    assert!(request.messages[0]
        .content
        .starts_with("You are Juniper, a helpful General Assistant."));
    assert_eq!(request.messages[1].content, "first");
    assert_eq!(request.messages[2].content, "first reply");
    assert_eq!(request.messages[3].content, "second");
}

#[tokio::test]
async fn unconfigured_submit_leaves_log_untouched() {
    let mut session = Session::default();
    let client = StubClient::replying("never");

    let err = session.submit_turn(&client, "Hi").await.unwrap_err();

    assert_eq!(err, SessionError::NotConfigured);
    assert!(session.turns().is_empty());
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn blank_credential_never_configures() {
    let mut session = Session::default();
    session.set_credential("");
    assert!(!session.is_configured());

    let client = StubClient::replying("never");
    assert_eq!(
        session.submit_turn(&client, "Hi").await,
        Err(SessionError::NotConfigured)
    );
    assert_eq!(session.metrics(), SessionMetrics::default());
}

#[tokio::test]
async fn blank_text_is_rejected_without_a_call() {
    let mut session = configured_session();
    let client = StubClient::replying("never");

    assert_eq!(
        session.submit_turn(&client, "   ").await,
        Err(SessionError::EmptyTurn)
    );
    assert!(session.turns().is_empty());
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn failed_request_keeps_only_the_user_turn() {
    let mut session = configured_session();
    let ok = StubClient::replying("fine");
    session.submit_turn(&ok, "warm up").await.unwrap();
    let before = session.turns().len();

    let failing = StubClient::failing("quota exceeded");
    let err = session.submit_turn(&failing, "Hi").await.unwrap_err();

    let stub_text = AiError::ApiError("quota exceeded".into()).to_string();
    assert_eq!(err, SessionError::CompletionRequestFailed(stub_text.clone()));
    assert_eq!(err.to_string(), stub_text);
    assert_eq!(session.turns().len(), before + 1);
    assert_eq!(session.turns().last(), Some(&Turn::user("Hi")));
    assert_eq!(session.last_error(), Some(stub_text.as_str()));
    assert_eq!(failing.calls(), 1);
}

#[tokio::test]
async fn success_clears_last_error() {
    let mut session = configured_session();
    let _ = session
        .submit_turn(&StubClient::failing("boom"), "one")
        .await;
    assert!(session.last_error().is_some());

    session
        .submit_turn(&StubClient::replying("ok"), "two")
        .await
        .unwrap();
    assert!(session.last_error().is_none());
    // Orphaned user turn stays; the retry is a new turn.
    assert_eq!(session.turns().len(), 3);
}

#[tokio::test]
async fn reset_empties_everything() {
    let mut session = configured_session();
    let client = StubClient::replying("ok");
    session.submit_turn(&client, "a").await.unwrap();
    let _ = session.submit_turn(&StubClient::failing("x"), "b").await;

    session.reset();

    assert!(session.turns().is_empty());
    assert_eq!(session.metrics(), SessionMetrics::default());
    assert!(session.last_error().is_none());
    assert_eq!(session.tracker().call_count(), 0);
    assert!(session.is_configured());
}

#[test]
fn reset_on_fresh_session() {
    let mut session = Session::default();
    session.reset();
    assert_eq!(session.metrics(), SessionMetrics::default());
}

#[test]
fn configured_flag_is_sticky() {
    let mut session = Session::default();
    assert!(!session.is_configured());

    session.set_credential("sk-1");
    assert!(session.is_configured());

    session.set_credential("");
    assert!(session.is_configured());
}

#[tokio::test]
async fn blank_credential_keeps_previous_secret() {
    let mut session = Session::default();
    session.set_credential("sk-1");
    session.set_credential("");
    let client = StubClient::replying("ok");
    session.submit_turn(&client, "hi").await.unwrap();
    assert_eq!(client.last_request().api_key.expose(), "sk-1");
}

#[tokio::test]
async fn disabled_capabilities_do_not_block_requests() {
    let mut session = Session::default();
    session.configure(
        "x",
        AgentConfig::default()
            .with_role(AgentRole::CodeExpert)
            .with_capabilities(Capabilities::none()),
    );
    let client = StubClient::replying("fn main() {}");

    session
        .submit_turn(&client, "write me some code")
        .await
        .unwrap();

    let system = &client.last_request().messages[0].content;
    assert!(system.contains("Decline coding assistance"));
    assert!(!system.contains("Provide code examples and explanations"));
    assert_eq!(session.metrics().assistant_turns, 1);
}

#[tokio::test]
async fn agent_change_applies_to_next_turn() {
    let mut session = configured_session();
    let client = StubClient::replying("ok");
    session.submit_turn(&client, "one").await.unwrap();

    let mut agent = session.agent_config().clone();
    agent.role = AgentRole::BusinessConsultant;
    agent.creativity = 0.0;
    session.set_agent_config(agent);
    session.submit_turn(&client, "two").await.unwrap();

    let request = client.last_request();
    assert!(request.messages[0].content.contains("a helpful Business Consultant"));
    assert_eq!(request.temperature, 0.0);
    assert_eq!(session.turns().len(), 4);
}

#[tokio::test]
async fn summary_reflects_state() {
    let mut caps = Capabilities::default();
    caps.set(Capability::AnalyzeText, false);
    let mut session = Session::new(
        AgentConfig::default()
            .with_name("Ada")
            .with_role(AgentRole::ResearchHelper)
            .with_capabilities(caps),
    );

    let before = session.summary();
    assert!(!before.configured);
    assert_eq!(before.metrics, SessionMetrics::default());

    session.set_credential("x");
    session
        .submit_turn(&StubClient::replying("ok"), "hi")
        .await
        .unwrap();

    let summary = session.summary();
    assert_eq!(summary.name, "Ada");
    assert_eq!(summary.role, AgentRole::ResearchHelper);
    assert!(summary.configured);
    assert_eq!(
        summary.active_capabilities,
        vec![
            Capability::AnswerQuestions,
            Capability::GenerateContent,
            Capability::CodeAssistance,
        ]
    );
    assert_eq!(summary.metrics.total_turns, 2);
    assert_eq!(summary.usage.total_tokens(), 9);
    assert_eq!(summary.completed_calls, 1);
    assert!(summary.last_error.is_none());
}
