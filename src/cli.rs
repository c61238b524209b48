//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// keyboard-shortcuts - browse, validate and replay app shortcut catalogs
#[derive(Parser, Debug)]
#[command(name = "keyboard-shortcuts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog path or URL (overrides config)
    #[arg(long, global = true, value_name = "SOURCE")]
    pub catalog: Option<String>,

    /// Key-code table path or URL (overrides config)
    #[arg(long, global = true, value_name = "SOURCE")]
    pub key_codes: Option<String>,

    /// Tracing filter (overrides config and RUST_LOG), e.g. "debug"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every shortcut in the catalog
    Validate,

    /// List apps, or the shortcuts of one app
    List {
        /// App slug
        #[arg(long)]
        app: Option<String>,
    },

    /// Print the injection engine arguments for a shortcut as JSON
    Args {
        /// App slug
        app: String,
        /// Shortcut title
        shortcut: String,
        /// Activation delay in seconds (overrides config)
        #[arg(long, value_name = "SECONDS")]
        delay: Option<f64>,
    },

    /// Press a shortcut in its app
    Run {
        /// App slug
        app: String,
        /// Shortcut title
        shortcut: String,
        /// Activation delay in seconds (overrides config)
        #[arg(long, value_name = "SECONDS")]
        delay: Option<f64>,
    },
}
