//! Shortcut execution.
//!
//! - `encoder` - turns a chord sequence into the engine's argument list
//! - `applescript` - the `osascript` engine that consumes that list
//!
//! [`ShortcutRunner`] ties both together. The encoder is pure; all I/O
//! happens behind the [`Injector`] trait.

mod applescript;
mod encoder;

use thiserror::Error;
use tracing::instrument;

use crate::logging;
use crate::shortcuts::{Application, KeyCodes, SectionShortcut};

pub use applescript::{AppleScriptInjector, INJECTION_SCRIPT};
pub use encoder::build_arguments;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    #[error("No key code for base key \"{0}\"")]
    UnknownKeyCode(String),
    #[error("Shortcut \"{0}\" has no key sequence to run")]
    EmptySequence(String),
    #[error("Failed to start injection engine: {0}")]
    Spawn(String),
    #[error("Injection engine failed (status {status:?}): {stderr}")]
    Injection { status: Option<i32>, stderr: String },
}

/// The external engine that presses keys.
pub trait Injector {
    fn inject(&self, args: &[String]) -> Result<(), RunnerError>;
}

impl<T: Injector + ?Sized> Injector for &T {
    fn inject(&self, args: &[String]) -> Result<(), RunnerError> {
        (**self).inject(args)
    }
}

/// Encodes shortcuts against one key-code table and hands them to an injector.
pub struct ShortcutRunner<'a, I: Injector = AppleScriptInjector> {
    key_codes: &'a KeyCodes,
    delay_seconds: f64,
    injector: I,
}

impl<'a, I: Injector> ShortcutRunner<'a, I> {
    pub fn new(key_codes: &'a KeyCodes, delay_seconds: f64, injector: I) -> Self {
        Self {
            key_codes,
            delay_seconds,
            injector,
        }
    }

    pub fn delay_seconds(&self) -> f64 {
        self.delay_seconds
    }

    /// Argument list that [`run`](Self::run) would hand to the injector.
    pub fn arguments(
        &self,
        app: &Application,
        shortcut: &SectionShortcut,
    ) -> Result<Vec<String>, RunnerError> {
        if !shortcut.is_executable() {
            return Err(RunnerError::EmptySequence(shortcut.title.clone()));
        }
        build_arguments(
            app.target_id(),
            self.delay_seconds,
            &shortcut.sequence,
            self.key_codes,
        )
    }

    #[instrument(skip_all, fields(app = %app.slug, shortcut = %shortcut.title))]
    pub fn run(&self, app: &Application, shortcut: &SectionShortcut) -> Result<(), RunnerError> {
        let args = self.arguments(app, shortcut)?;
        let result = self.injector.inject(&args);
        logging::log_shortcut_run(
            &app.slug,
            &shortcut.title,
            shortcut.sequence.len(),
            result.is_ok(),
        );
        result
    }
}
