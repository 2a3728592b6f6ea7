//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod agent;
mod helpers;
mod provider;


use crate::schema::SidekickConfig;
use sidekick_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SidekickConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    agent::validate_agent(&mut errors, config);
    provider::validate_provider(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
