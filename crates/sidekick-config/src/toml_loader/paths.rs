//! Where the config file lives, and writing the first-run template there.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use sidekick_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// `<platform config dir>/sidekick/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("sidekick").join("config.toml"))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Io { path, source }
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched. Returns whether the template was written.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already exists at {}, not overwriting", path.display());
            return Ok(false);
        }
        Err(e) => return Err(io_error(path)(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(io_error(path))?;

    info!("created default config at {}", path.display());
    Ok(true)
}
