//! Configuration schema types for Sidekick.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod agent;
mod logging;
mod provider;

pub use agent::*;
pub use logging::*;
pub use provider::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Sidekick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SidekickConfig {
    pub agent: AgentConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}
