//! System prompt built from the agent persona.
//!
//! Capability flags only change the wording of the instruction; nothing
//! here or in the session enforces them.

use chrono::NaiveDate;
use sidekick_config::{AgentConfig, Capability};

/// Instruction line for a capability, depending on whether it is enabled.
pub fn capability_clause(capability: Capability, enabled: bool) -> &'static str {
    match (capability, enabled) {
        (Capability::AnswerQuestions, true) => "Answer questions with accurate information",
        (Capability::AnswerQuestions, false) => "Politely decline to answer questions",
        (Capability::GenerateContent, true) => "Generate creative content when requested",
        (Capability::GenerateContent, false) => "Decline requests to generate content",
        (Capability::AnalyzeText, true) => "Analyze and summarize text",
        (Capability::AnalyzeText, false) => "Decline text analysis requests",
        (Capability::CodeAssistance, true) => "Provide code examples and explanations",
        (Capability::CodeAssistance, false) => "Decline coding assistance",
    }
}

/// Build the system instruction for `agent` as of `today`.
pub fn build_system_prompt(agent: &AgentConfig, today: NaiveDate) -> String {
    let mut prompt = format!(
        "You are {}, a helpful {}.\n\nCapabilities:\n",
        agent.name,
        agent.role.label()
    );

    for capability in Capability::ALL {
        let enabled = agent.capabilities.is_enabled(capability);
        prompt.push_str("- ");
        prompt.push_str(capability_clause(capability, enabled));
        prompt.push('\n');
    }

    prompt.push_str(&format!("\nCurrent date: {}", today.format("%Y-%m-%d")));
    prompt
}
