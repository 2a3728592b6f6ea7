//! Parsing of lines typed at the prompt.

use sidekick_config::{AgentRole, Capability};

/// One user action from the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Plain text: send it to the assistant.
    Say(String),
    Reset,
    Status,
    History,
    Help,
    Key(String),
    Name(String),
    Role(AgentRole),
    Creativity(f64),
    Enable(Capability),
    Disable(Capability),
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '/{0}'")]
    UnknownCommand(String),
    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
}

/// Parse a creativity value; accepts only finite numbers in `[0.0, 1.0]`.
pub fn parse_creativity(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("creativity must be a number, got '{}'", s.trim()))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("creativity must be between 0.0 and 1.0, got {value}"));
    }
    Ok(value)
}

/// Parse one input line. Blank lines yield `None`. Text that is not a
/// command is kept exactly as typed.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(Some(Command::Say(line.to_string())));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "reset" | "clear" => Command::Reset,
        "status" => Command::Status,
        "history" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "key" => Command::Key(required(arg, "key")?.to_string()),
        "name" => Command::Name(required(arg, "name")?.to_string()),
        "role" => Command::Role(
            required(arg, "role")?
                .parse()
                .map_err(|e: sidekick_config::UnknownName| {
                    CommandError::InvalidArgument(e.to_string())
                })?,
        ),
        "creativity" => Command::Creativity(
            parse_creativity(required(arg, "creativity")?).map_err(CommandError::InvalidArgument)?,
        ),
        "enable" => Command::Enable(parse_capability(required(arg, "enable")?)?),
        "disable" => Command::Disable(parse_capability(required(arg, "disable")?)?),
        _ => return Err(CommandError::UnknownCommand(name.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(arg: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

fn parse_capability(arg: &str) -> Result<Capability, CommandError> {
    arg.parse()
        .map_err(|e: sidekick_config::UnknownName| CommandError::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t"), Ok(None));
    }

    #[test]
    fn plain_text_is_said() {
        assert_eq!(parse("Hi there"), Command::Say("Hi there".into()));
    }

    #[test]
    fn said_text_keeps_surrounding_whitespace() {
        assert_eq!(parse("  Hi there "), Command::Say("  Hi there ".into()));
        assert_eq!(parse("\tindented code"), Command::Say("\tindented code".into()));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("/reset"), Command::Reset);
        assert_eq!(parse("/clear"), Command::Reset);
        assert_eq!(parse("/STATUS"), Command::Status);
        assert_eq!(parse("/history"), Command::History);
        assert_eq!(parse("/help"), Command::Help);
        assert_eq!(parse("/exit"), Command::Quit);
    }

    #[test]
    fn key_keeps_argument() {
        assert_eq!(parse("/key sk-abc123"), Command::Key("sk-abc123".into()));
        assert_eq!(
            parse_line("/key"),
            Err(CommandError::MissingArgument("key"))
        );
    }

    #[test]
    fn name_takes_rest_of_line() {
        assert_eq!(parse("/name  Doctor Who "), Command::Name("Doctor Who".into()));
    }

    #[test]
    fn role_accepts_label() {
        assert_eq!(parse("/role Code Expert"), Command::Role(AgentRole::CodeExpert));
        assert_eq!(
            parse("/role research_helper"),
            Command::Role(AgentRole::ResearchHelper)
        );
        assert!(matches!(
            parse_line("/role Pirate"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn creativity_is_bounded() {
        assert_eq!(parse("/creativity 0.3"), Command::Creativity(0.3));
        assert_eq!(parse("/creativity 1"), Command::Creativity(1.0));
        assert!(parse_line("/creativity 1.1").is_err());
        assert!(parse_line("/creativity -0.1").is_err());
        assert!(parse_line("/creativity warm").is_err());
        assert!(parse_line("/creativity NaN").is_err());
    }

    #[test]
    fn capability_toggles() {
        assert_eq!(
            parse("/disable code"),
            Command::Disable(Capability::CodeAssistance)
        );
        assert_eq!(
            parse("/enable analyze_text"),
            Command::Enable(Capability::AnalyzeText)
        );
        assert!(parse_line("/enable flying").is_err());
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_line("/dance now"),
            Err(CommandError::UnknownCommand("dance".into()))
        );
    }
}
