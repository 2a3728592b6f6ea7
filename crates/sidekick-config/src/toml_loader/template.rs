//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Sidekick Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[agent]
# name = "Assistant"
# role = "general_assistant"  # general_assistant, research_helper, creative_writer,
#                             # code_expert, business_consultant
# creativity = 0.7            # 0.0-1.0, sent as the sampling temperature

[agent.capabilities]
# answer_questions = true
# generate_content = true
# analyze_text = true
# code_assistance = true

[provider]
# base_url = "https://api.openai.com/v1"
# model = "gpt-3.5-turbo"
# timeout_secs = 60           # 1-600
# connect_timeout_secs = 10   # 1-120
# api_key_env = "OPENAI_API_KEY"

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
