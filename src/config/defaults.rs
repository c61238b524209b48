//! Default configuration values

/// Catalog of apps and their shortcuts
pub const DEFAULT_CATALOG_SOURCE: &str = "~/.keyboard-shortcuts/shortcuts.json";

/// Symbolic key name -> platform key code table
pub const DEFAULT_KEY_CODES_SOURCE: &str = "~/.keyboard-shortcuts/key-codes.json";

/// Seconds to wait after activating the target app before pressing keys
pub const DEFAULT_ACTIVATION_DELAY_SECONDS: f64 = 0.5;

/// Config file location
pub const DEFAULT_CONFIG_PATH: &str = "~/.keyboard-shortcuts/config.json";
