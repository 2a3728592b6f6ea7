use std::path::PathBuf;

use clap::Parser;
use sidekick_config::{AgentRole, SidekickConfig};

use crate::commands::parse_creativity;

/// Sidekick: a personal AI assistant in your terminal.
#[derive(Parser, Debug)]
#[command(name = "sidekick", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, sidekick_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Assistant name.
    #[arg(long)]
    pub name: Option<String>,

    /// Assistant role ("Code Expert" or code_expert).
    #[arg(long, value_parser = parse_role)]
    pub role: Option<AgentRole>,

    /// Response creativity, 0.0-1.0.
    #[arg(long, value_parser = parse_creativity)]
    pub creativity: Option<f64>,

    /// Model identifier sent to the completion endpoint.
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    pub print_config: bool,
}

fn parse_role(s: &str) -> Result<AgentRole, String> {
    s.parse().map_err(|e: sidekick_config::UnknownName| e.to_string())
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut SidekickConfig) {
        if let Some(ref name) = self.name {
            config.agent.name = name.clone();
        }
        if let Some(role) = self.role {
            config.agent.role = role;
        }
        if let Some(creativity) = self.creativity {
            config.agent.creativity = creativity;
        }
        if let Some(ref model) = self.model {
            config.provider.model = model.clone();
        }
        if let Some(ref base_url) = self.base_url {
            config.provider.base_url = base_url.clone();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
