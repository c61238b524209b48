//! Configuration type definitions

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults::*;
use crate::catalog::Source;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path or http(s) URL of the shortcut catalog
    #[serde(default = "default_catalog_source")]
    pub catalog_source: String,
    /// Path or http(s) URL of the key-code table
    #[serde(default = "default_key_codes_source")]
    pub key_codes_source: String,
    /// Delay between activating the target app and the first chord (seconds)
    #[serde(default = "default_activation_delay_seconds")]
    pub activation_delay_seconds: f64,
    /// Tracing filter, e.g. "debug" or "info,keyboard_shortcuts=trace"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_catalog_source() -> String {
    DEFAULT_CATALOG_SOURCE.to_string()
}
fn default_key_codes_source() -> String {
    DEFAULT_KEY_CODES_SOURCE.to_string()
}
fn default_activation_delay_seconds() -> f64 {
    DEFAULT_ACTIVATION_DELAY_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_source: default_catalog_source(),
            key_codes_source: default_key_codes_source(),
            activation_delay_seconds: DEFAULT_ACTIVATION_DELAY_SECONDS,
            log_level: None,
        }
    }
}

impl Config {
    pub fn catalog(&self) -> Source {
        Source::parse(&self.catalog_source)
    }

    pub fn key_codes(&self) -> Source {
        Source::parse(&self.key_codes_source)
    }

    /// Replace a negative or non-finite delay with the default.
    pub fn sanitized(mut self) -> Self {
        let delay = self.activation_delay_seconds;
        if !delay.is_finite() || delay < 0.0 {
            warn!(
                activation_delay_seconds = delay,
                default = DEFAULT_ACTIVATION_DELAY_SECONDS,
                "Invalid activation delay, using default"
            );
            self.activation_delay_seconds = DEFAULT_ACTIVATION_DELAY_SECONDS;
        }
        self
    }
}
