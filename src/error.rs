use thiserror::Error;
use tracing::{error, warn};

use crate::catalog::CatalogError;
use crate::runner::RunnerError;
use crate::shortcuts::ValidationError;

/// Error severity for user-facing reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // recoverable, e.g. one bad app in a lenient load
    Error,   // operation failed
}

/// Crate-wide error
#[derive(Error, Debug)]
pub enum KeyboardShortcutsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("No app with slug '{0}'")]
    AppNotFound(String),

    #[error("No shortcut titled '{title}' in '{app}'")]
    ShortcutNotFound { app: String, title: String },
}

impl KeyboardShortcutsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(_) => ErrorSeverity::Error,
            Self::Catalog(_) => ErrorSeverity::Error,
            Self::Runner(RunnerError::EmptySequence(_)) => ErrorSeverity::Warning,
            Self::Runner(_) => ErrorSeverity::Error,
            Self::AppNotFound(_) => ErrorSeverity::Warning,
            Self::ShortcutNotFound { .. } => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => format!("Catalog contains an invalid shortcut: {}", e),
            Self::Catalog(e) => format!("Could not load shortcuts: {}", e),
            Self::Runner(RunnerError::EmptySequence(title)) => {
                format!("'{}' is documentation only and cannot be run", title)
            }
            Self::Runner(RunnerError::Injection { stderr, .. }) if stderr.contains("assistive") => {
                "Grant Accessibility permission in System Settings > Privacy & Security".to_string()
            }
            Self::Runner(e) => format!("Could not run shortcut: {}", e),
            Self::AppNotFound(slug) => format!("Unknown app '{}'", slug),
            Self::ShortcutNotFound { app, title } => format!("'{}' has no shortcut '{}'", app, title),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeyboardShortcutsError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use keyboard_shortcuts::error::ResultExt;
///
/// let config = Config::load(&path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
