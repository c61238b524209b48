//! Configuration module - catalog sources and runner settings
//!
//! - `defaults` - All default constant values
//! - `types` - The `Config` struct
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_ACTIVATION_DELAY_SECONDS, DEFAULT_CATALOG_SOURCE, DEFAULT_CONFIG_PATH,
    DEFAULT_KEY_CODES_SOURCE,
};
pub use loader::{default_config_path, load_config, load_config_from};
pub use types::Config;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
