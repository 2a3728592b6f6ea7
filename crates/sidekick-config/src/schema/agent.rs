//! Agent persona configuration: name, role, capability flags, creativity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The persona the assistant is asked to play.
///
/// Written to config files by key; read back from either the key or the
/// label in any case, the same way `/role` parses it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AgentRole {
    #[default]
    GeneralAssistant,
    ResearchHelper,
    CreativeWriter,
    CodeExpert,
    BusinessConsultant,
}

impl AgentRole {
    pub const ALL: [AgentRole; 5] = [
        AgentRole::GeneralAssistant,
        AgentRole::ResearchHelper,
        AgentRole::CreativeWriter,
        AgentRole::CodeExpert,
        AgentRole::BusinessConsultant,
    ];

    /// Human-readable label, also used verbatim in the system prompt.
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::GeneralAssistant => "General Assistant",
            AgentRole::ResearchHelper => "Research Helper",
            AgentRole::CreativeWriter => "Creative Writer",
            AgentRole::CodeExpert => "Code Expert",
            AgentRole::BusinessConsultant => "Business Consultant",
        }
    }

    /// Key used in config files (`code_expert`).
    pub fn key(&self) -> &'static str {
        match self {
            AgentRole::GeneralAssistant => "general_assistant",
            AgentRole::ResearchHelper => "research_helper",
            AgentRole::CreativeWriter => "creative_writer",
            AgentRole::CodeExpert => "code_expert",
            AgentRole::BusinessConsultant => "business_consultant",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a role or capability name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

/// Lowercases and folds spaces and dashes to underscores.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

impl FromStr for AgentRole {
    type Err = UnknownName;

    /// Accepts either the label ("Code Expert") or the key ("code_expert").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        AgentRole::ALL
            .into_iter()
            .find(|role| role.key() == wanted)
            .ok_or_else(|| UnknownName {
                kind: "role",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for AgentRole {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One of the four advisory capability toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AnswerQuestions,
    GenerateContent,
    AnalyzeText,
    CodeAssistance,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::AnswerQuestions,
        Capability::GenerateContent,
        Capability::AnalyzeText,
        Capability::CodeAssistance,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Capability::AnswerQuestions => "answer_questions",
            Capability::GenerateContent => "generate_content",
            Capability::AnalyzeText => "analyze_text",
            Capability::CodeAssistance => "code_assistance",
        }
    }

    /// Label shown in the status panel when the capability is active.
    pub fn label(&self) -> &'static str {
        match self {
            Capability::AnswerQuestions => "Question answering",
            Capability::GenerateContent => "Content generation",
            Capability::AnalyzeText => "Text analysis",
            Capability::CodeAssistance => "Code assistance",
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            Capability::AnswerQuestions => "questions",
            Capability::GenerateContent => "content",
            Capability::AnalyzeText => "analysis",
            Capability::CodeAssistance => "code",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Capability {
    type Err = UnknownName;

    /// Accepts the config key (`code_assistance`) or a short name (`code`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Capability::ALL
            .into_iter()
            .find(|cap| cap.key() == wanted || cap.short_name() == wanted)
            .ok_or_else(|| UnknownName {
                kind: "capability",
                value: s.to_string(),
            })
    }
}

/// Capability flags. They only change the wording of the system prompt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Capabilities {
    pub answer_questions: bool,
    pub generate_content: bool,
    pub analyze_text: bool,
    pub code_assistance: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            answer_questions: true,
            generate_content: true,
            analyze_text: true,
            code_assistance: true,
        }
    }
}

impl Capabilities {
    /// All four flags turned off.
    pub fn none() -> Self {
        Self {
            answer_questions: false,
            generate_content: false,
            analyze_text: false,
            code_assistance: false,
        }
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::AnswerQuestions => self.answer_questions,
            Capability::GenerateContent => self.generate_content,
            Capability::AnalyzeText => self.analyze_text,
            Capability::CodeAssistance => self.code_assistance,
        }
    }

    pub fn set(&mut self, capability: Capability, enabled: bool) {
        let flag = match capability {
            Capability::AnswerQuestions => &mut self.answer_questions,
            Capability::GenerateContent => &mut self.generate_content,
            Capability::AnalyzeText => &mut self.analyze_text,
            Capability::CodeAssistance => &mut self.code_assistance,
        };
        *flag = enabled;
    }

    /// Enabled capabilities, in display order.
    pub fn active(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

/// Persona configuration used to build the system prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    pub role: AgentRole,
    /// Sampling temperature sent with every request (valid range: 0.0-1.0).
    pub creativity: f64,
    pub capabilities: Capabilities,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Assistant".to_string(),
            role: AgentRole::GeneralAssistant,
            creativity: 0.7,
            capabilities: Capabilities::default(),
        }
    }
}

impl AgentConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_role(mut self, role: AgentRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_creativity(mut self, creativity: f64) -> Self {
        self.creativity = creativity;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}
