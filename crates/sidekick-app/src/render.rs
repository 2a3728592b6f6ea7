//! Text rendering for the terminal front end.

use sidekick_ai::{SessionSummary, Turn, TurnRole};
use sidekick_common::{Notice, NoticeLevel};

pub const BANNER: &str = "Personal AI Assistant\n\
Your AI-powered assistant with customizable capabilities. Type /help for commands.";

pub const HELP: &str = "\
How to use this AI Assistant
  1. Set your API key with /key <secret> (or the OPENAI_API_KEY environment variable)
  2. Configure the agent's personality and capabilities
  3. Start chatting: anything not starting with / is sent to the assistant

Commands
  /key <secret>          configure the API key
  /name <text>           set the assistant's name
  /role <role>           General Assistant, Research Helper, Creative Writer,
                         Code Expert, Business Consultant
  /creativity <0.0-1.0>  set response creativity
  /enable <capability>   questions, content, analysis, code
  /disable <capability>  same names as /enable
  /status                show agent status and conversation metrics
  /history               show the whole conversation
  /reset                 clear the conversation
  /quit                  leave

Tips
  - Adjust creativity to control how varied the responses are
  - Clear the conversation to start fresh
  - Enable or disable capabilities as needed";

/// One conversation entry, labelled with who said it.
pub fn render_turn(turn: &Turn, assistant_name: &str) -> String {
    let label = match turn.role() {
        TurnRole::User => "You",
        TurnRole::Assistant => assistant_name,
    };
    format!("[{label}] {}", turn.content())
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "warn",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.body)
}

/// Status panel: persona, active capabilities, metrics, key status.
pub fn render_status(summary: &SessionSummary) -> String {
    let mut out = String::from("Agent Status\n");
    out.push_str(&format!("  Name: {}\n", summary.name));
    out.push_str(&format!("  Role: {}\n", summary.role.label()));
    out.push_str(&format!("  Creativity Level: {:.1}\n", summary.creativity));

    out.push_str("\n  Active Capabilities:\n");
    if summary.active_capabilities.is_empty() {
        out.push_str("  (none)\n");
    }
    for capability in &summary.active_capabilities {
        out.push_str(&format!("  - {}\n", capability.label()));
    }

    // Metrics only once there is something to count.
    if summary.metrics.total_turns > 0 {
        out.push_str(&format!(
            "\n  Messages Exchanged: {}\n",
            summary.metrics.total_turns
        ));
        out.push_str(&format!("  Your Messages: {}\n", summary.metrics.user_turns));
        out.push_str(&format!(
            "  Assistant Responses: {}\n",
            summary.metrics.assistant_turns
        ));
        out.push_str(&format!(
            "  Tokens Used: {} ({} calls)\n",
            summary.usage.total_tokens(),
            summary.completed_calls
        ));
    }

    out.push('\n');
    if summary.configured {
        out.push_str("  API Key Configured");
    } else {
        out.push_str("  API Key Not Configured");
    }

    if let Some(ref error) = summary.last_error {
        out.push_str(&format!("\n  Last error: {error}"));
    }

    out
}
