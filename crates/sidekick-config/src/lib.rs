//! Sidekick configuration system.
//!
//! Provides TOML-based configuration for the agent persona, the completion
//! endpoint and logging. All sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sidekick_config::{load_config, config_to_toml};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_toml(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AgentConfig, AgentRole, Capabilities, Capability, LogLevel, ProviderConfig, SidekickConfig,
    UnknownName, CONFIG_SCHEMA_VERSION,
};

use sidekick_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// With `Some(path)` the file must exist. With `None` the platform default
/// path is used and a commented default file is created when missing.
pub fn load_config(path: Option<&Path>) -> Result<SidekickConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed TOML string.
pub fn config_to_toml(config: &SidekickConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}
