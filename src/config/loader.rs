//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;

pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from ~/.keyboard-shortcuts/config.json
pub fn load_config() -> Config {
    load_config_from(&default_config_path())
}

/// Load configuration from `config_path`.
///
/// Returns Config::default() if the file is missing, unreadable or invalid.
#[instrument(name = "load_config")]
pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => {
            info!(path = %config_path.display(), "Successfully loaded config");
            config.sanitized()
        }
        Err(e) => {
            let hint = if e.to_string().contains("invalid type") {
                "\n\nHint: sources are strings and activationDelaySeconds is a number. Example:\n\
                {\n\
                  \"catalogSource\": \"~/.keyboard-shortcuts/shortcuts.json\",\n\
                  \"activationDelaySeconds\": 0.5\n\
                }"
            } else {
                ""
            };
            warn!(
                path = %config_path.display(),
                error = %e,
                hint = %hint,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}
