//! Shortcut grammar: modifier table, validator and parser.
//!
//! A catalog key string is a space-separated list of chords, each chord being
//! `(modifier "+")* base`:
//!
//! ```text
//! "cmd+k cmd+s"   -> [⌘K, ⌘S]
//! "ctrl+shift+e"  -> [⌃⇧E]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use keyboard_shortcuts::shortcuts::{parse_validated, InputApp, KeyCodes};
//!
//! let apps: Vec<InputApp> = serde_json::from_str(&catalog_json)?;
//! let parsed = parse_validated(&key_codes, &apps)?;
//! ```

mod input;
mod modifier;
mod parser;
mod types;
mod validator;

#[cfg(test)]
#[path = "validator_tests.rs"]
mod validator_tests;

pub use input::{InputApp, InputKeymap, InputSection, InputShortcut};
pub use modifier::Modifier;
pub use parser::{parse, parse_app, parse_key, parse_validated};
pub use types::{Application, AtomicShortcut, KeyCodes, Keymap, Section, SectionShortcut};
pub use validator::{validate, validate_app, validate_key, ValidationError};
