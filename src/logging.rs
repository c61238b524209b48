//! Structured JSONL logging plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.keyboard-shortcuts/logs/keyboard-shortcuts.jsonl)
//! - **Compact to stderr** for interactive use
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyboard_shortcuts::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(None);
//!
//! tracing::info!(event_type = "catalog", app_count = 12, "Catalog loaded");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"WARN","target":"keyboard_shortcuts::shortcuts::validator","fields":{"event_type":"validation_failure","app":"vscode","message":"Shortcut rejected"}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::shortcuts::ValidationError;

const LOG_FILE_NAME: &str = "keyboard-shortcuts.jsonl";
const DEFAULT_FILTER: &str = "info,ureq=warn";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize dual-output logging.
///
/// Filter precedence: `filter_override` (CLI / config), then `RUST_LOG`,
/// then `info`. A log file that cannot be opened disables the file layer
/// instead of failing startup.
pub fn init(filter_override: Option<&str>) -> LoggingGuard {
    let env_filter = match filter_override {
        Some(filter) => EnvFilter::try_new(filter).unwrap_or_else(|e| {
            eprintln!("[LOGGING] Invalid log filter '{}': {}", filter, e);
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let log_path = log_path();
    let file = log_path
        .parent()
        .map(fs::create_dir_all)
        .transpose()
        .and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
        });

    let (json_layer, file_guard) = match file {
        Ok(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("[LOGGING] Failed to open {}: {}", log_path.display(), e);
            (None, None)
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .compact();

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    if initialized.is_ok() {
        tracing::debug!(
            event_type = "app_lifecycle",
            action = "started",
            log_path = %log_path.display(),
            "Logging initialized"
        );
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".keyboard-shortcuts").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("keyboard-shortcuts-logs"))
}

/// Path of the JSONL log file.
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// STRUCTURED LOGGING HELPERS
// =============================================================================

/// Log a shortcut rejected by the validator, with its catalog position.
pub fn log_validation_failure(app: &str, section: &str, shortcut: &str, error: &ValidationError) {
    tracing::warn!(
        event_type = "validation_failure",
        app = app,
        section = section,
        shortcut = shortcut,
        key = error.offending(),
        error = %error,
        "Shortcut rejected"
    );
}

/// Log a shortcut execution attempt.
pub fn log_shortcut_run(app: &str, shortcut: &str, chord_count: usize, success: bool) {
    if success {
        tracing::info!(
            event_type = "shortcut_run",
            app = app,
            shortcut = shortcut,
            chord_count = chord_count,
            success = true,
            "Ran {} in {}", shortcut, app
        );
    } else {
        tracing::warn!(
            event_type = "shortcut_run",
            app = app,
            shortcut = shortcut,
            chord_count = chord_count,
            success = false,
            "Failed to run {} in {}", shortcut, app
        );
    }
}

/// Log a catalog snapshot load.
pub fn log_catalog_loaded(source: &str, app_count: usize, skipped: usize) {
    tracing::info!(
        event_type = "catalog",
        source = source,
        app_count = app_count,
        skipped = skipped,
        "Loaded {} apps from {}", app_count, source
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_ends_with_jsonl_file() {
        let path = log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
    }

    #[test]
    fn helpers_do_not_panic_without_subscriber() {
        log_validation_failure(
            "app",
            "General",
            "Edit",
            &ValidationError::UnknownModifier("abc+e".to_string()),
        );
        log_shortcut_run("app", "Edit", 1, true);
        log_shortcut_run("app", "Edit", 1, false);
        log_catalog_loaded("catalog.json", 3, 0);
    }
}
