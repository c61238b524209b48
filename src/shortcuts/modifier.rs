//! The fixed modifier table.
//!
//! Every modifier has three projections:
//! - the input token used in catalog key strings (`ctrl`, `shift`, `opt`, `cmd`)
//! - the runtime token handed to the injection engine (`control down`, ...)
//! - a canonical order index (control < shift < option < command)

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four supported modifier keys.
///
/// The derived `Ord` follows declaration order, which is the canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Control,
    Shift,
    Option,
    Command,
}

impl Modifier {
    /// All modifiers in canonical order.
    pub const ALL: [Modifier; 4] = [
        Modifier::Control,
        Modifier::Shift,
        Modifier::Option,
        Modifier::Command,
    ];

    /// Token accepted in catalog key strings.
    pub fn input_token(self) -> &'static str {
        match self {
            Self::Control => "ctrl",
            Self::Shift => "shift",
            Self::Option => "opt",
            Self::Command => "cmd",
        }
    }

    /// Token understood by the AppleScript `key code ... using {...}` form.
    pub fn runtime_token(self) -> &'static str {
        match self {
            Self::Control => "control down",
            Self::Shift => "shift down",
            Self::Option => "option down",
            Self::Command => "command down",
        }
    }

    pub fn order_index(self) -> u8 {
        match self {
            Self::Control => 0,
            Self::Shift => 1,
            Self::Option => 2,
            Self::Command => 3,
        }
    }

    /// macOS menu glyph.
    pub fn symbol(self) -> char {
        match self {
            Self::Control => '⌃',
            Self::Shift => '⇧',
            Self::Option => '⌥',
            Self::Command => '⌘',
        }
    }

    /// Resolve an input token. Matching is case-sensitive: `Ctrl` is not a modifier.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.input_token() == token)
    }

    pub fn is_token(token: &str) -> bool {
        Self::from_token(token).is_some()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_token())
    }
}
