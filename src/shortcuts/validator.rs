//! Catalog validation.
//!
//! Walks apps depth-first (app -> keymap -> section -> shortcut -> chord -> token)
//! and stops at the first violation. Modifier order inside a chord is not
//! checked here; the parser normalizes it.

use thiserror::Error;
use tracing::debug;

use super::input::{shortcuts_of, InputApp};
use super::modifier::Modifier;
use super::types::KeyCodes;
use crate::logging;

/// Grammar or vocabulary violation in a shortcut key string.
///
/// `InvalidShortcut` carries the offending chord, or the full key string when
/// the chord itself is empty; the other variants carry the full key string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid shortcut \"{0}\"")]
    InvalidShortcut(String),
    #[error("Unknown modifier in \"{0}\"")]
    UnknownModifier(String),
    #[error("Shortcut \"{0}\" ends with a modifier")]
    MissingBaseKey(String),
    #[error("Unknown base key in \"{0}\"")]
    UnknownBaseKey(String),
}

impl ValidationError {
    /// The raw string embedded in the error.
    pub fn offending(&self) -> &str {
        match self {
            Self::InvalidShortcut(s)
            | Self::UnknownModifier(s)
            | Self::MissingBaseKey(s)
            | Self::UnknownBaseKey(s) => s,
        }
    }
}

/// Validate every shortcut of every app, failing on the first violation.
pub fn validate(key_codes: &KeyCodes, apps: &[InputApp]) -> Result<(), ValidationError> {
    for app in apps {
        validate_app(key_codes, app)?;
    }
    debug!(app_count = apps.len(), "Catalog validated");
    Ok(())
}

/// Validate a single app. Comment-only shortcuts (no or empty key) are exempt.
pub fn validate_app(key_codes: &KeyCodes, app: &InputApp) -> Result<(), ValidationError> {
    for (_, section, shortcut) in shortcuts_of(app) {
        let Some(key) = shortcut.key() else {
            continue;
        };
        if let Err(e) = validate_key(key_codes, key) {
            logging::log_validation_failure(&app.slug, &section.title, &shortcut.title, &e);
            return Err(e);
        }
    }
    Ok(())
}

/// Validate one key string such as `"cmd+k cmd+s"`.
pub fn validate_key(key_codes: &KeyCodes, key: &str) -> Result<(), ValidationError> {
    key.split(' ')
        .try_for_each(|chord| validate_chord(key_codes, key, chord))
}

fn validate_chord(key_codes: &KeyCodes, key: &str, chord: &str) -> Result<(), ValidationError> {
    // An empty chord comes from a doubled, leading or trailing space.
    if chord.is_empty() {
        return Err(ValidationError::InvalidShortcut(key.to_string()));
    }

    let tokens: Vec<&str> = chord.split('+').collect();
    let (base, modifiers) = match tokens.split_last() {
        Some(split) => split,
        None => return Err(ValidationError::InvalidShortcut(chord.to_string())),
    };

    if modifiers.iter().any(|t| t.is_empty()) {
        return Err(ValidationError::InvalidShortcut(chord.to_string()));
    }
    if !modifiers.iter().all(|t| Modifier::is_token(t)) {
        return Err(ValidationError::UnknownModifier(key.to_string()));
    }

    if key_codes.contains_key(*base) {
        Ok(())
    } else if Modifier::is_token(base) {
        Err(ValidationError::MissingBaseKey(key.to_string()))
    } else {
        Err(ValidationError::UnknownBaseKey(key.to_string()))
    }
}
