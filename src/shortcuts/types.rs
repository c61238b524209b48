//! Parsed catalog model.
//!
//! All values here are immutable snapshots built by the parser. A catalog
//! refresh replaces them wholesale.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

use super::modifier::Modifier;

/// Symbolic base-key name -> platform key code (e.g., "e" -> "14").
pub type KeyCodes = HashMap<String, String>;

/// One chord: modifiers held together with a single base key.
///
/// `modifiers` is deduplicated and sorted in canonical order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomicShortcut {
    pub base: String,
    pub modifiers: SmallVec<[Modifier; 4]>,
}

impl AtomicShortcut {
    /// Build a chord, normalizing `modifiers` into canonical order.
    pub fn new(base: impl Into<String>, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut modifiers: SmallVec<[Modifier; 4]> = modifiers.into_iter().collect();
        modifiers.sort_unstable();
        modifiers.dedup();
        Self {
            base: base.into(),
            modifiers,
        }
    }

    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// macOS-style rendering, e.g. `⌃⌘E` or `⇧↵`.
    pub fn symbols(&self) -> String {
        let mut s: String = self.modifiers.iter().map(|m| m.symbol()).collect();
        s.push_str(&base_symbol(&self.base));
        s
    }
}

/// Canonical input form, e.g. `ctrl+cmd+e`.
impl fmt::Display for AtomicShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.input_token())?;
        }
        f.write_str(&self.base)
    }
}

fn base_symbol(base: &str) -> String {
    match base {
        "enter" | "return" => "↵",
        "escape" => "⎋",
        "tab" => "⇥",
        "space" => "␣",
        "delete" | "backspace" => "⌫",
        "forwarddelete" => "⌦",
        "up" => "↑",
        "down" => "↓",
        "left" => "←",
        "right" => "→",
        "home" => "↖",
        "end" => "↘",
        "pageup" => "⇞",
        "pagedown" => "⇟",
        k => return k.to_uppercase(),
    }
    .to_string()
}

/// A user-facing shortcut entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionShortcut {
    pub title: String,
    /// Chords pressed in order. Empty for documentation-only entries.
    pub sequence: Vec<AtomicShortcut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SectionShortcut {
    /// Entries without chords are shown but never executed.
    pub fn is_executable(&self) -> bool {
        !self.sequence.is_empty()
    }

    /// Rendering of the whole sequence, chords separated by a space.
    pub fn symbols(&self) -> String {
        self.sequence
            .iter()
            .map(AtomicShortcut::symbols)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub shortcuts: Vec<SectionShortcut>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub name: String,
    pub slug: String,
    pub keymaps: Vec<Keymap>,
}

impl Application {
    /// Identifier of the process to activate before injecting keys.
    ///
    /// Web apps have no target: their browser is expected to be frontmost.
    pub fn target_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }

    pub fn shortcuts(&self) -> impl Iterator<Item = &SectionShortcut> {
        self.keymaps
            .iter()
            .flat_map(|k| k.sections.iter())
            .flat_map(|s| s.shortcuts.iter())
    }

    /// First shortcut with the given title, searching keymaps in order.
    pub fn find_shortcut(&self, title: &str) -> Option<&SectionShortcut> {
        self.shortcuts().find(|s| s.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_and_dedups_modifiers() {
        let chord = AtomicShortcut::new(
            "e",
            [Modifier::Command, Modifier::Control, Modifier::Command],
        );
        assert_eq!(
            chord.modifiers.as_slice(),
            &[Modifier::Control, Modifier::Command]
        );
    }

    #[test]
    fn display_uses_canonical_input_tokens() {
        let chord = AtomicShortcut::new("k", [Modifier::Command, Modifier::Shift]);
        assert_eq!(chord.to_string(), "shift+cmd+k");
        assert_eq!(AtomicShortcut::new("f1", []).to_string(), "f1");
    }

    #[test]
    fn symbols_render_glyphs() {
        let chord = AtomicShortcut::new("e", [Modifier::Control, Modifier::Option]);
        assert_eq!(chord.symbols(), "⌃⌥E");
        assert_eq!(AtomicShortcut::new("enter", [Modifier::Shift]).symbols(), "⇧↵");
    }

    #[test]
    fn comment_only_entry_is_not_executable() {
        let entry = SectionShortcut {
            title: "Drag".to_string(),
            sequence: vec![],
            comment: Some("Drag with the mouse".to_string()),
        };
        assert!(!entry.is_executable());
        assert_eq!(entry.symbols(), "");
    }

    #[test]
    fn sequence_symbols_join_chords() {
        let entry = SectionShortcut {
            title: "Save all".to_string(),
            sequence: vec![
                AtomicShortcut::new("k", [Modifier::Command]),
                AtomicShortcut::new("s", [Modifier::Command]),
            ],
            comment: None,
        };
        assert!(entry.is_executable());
        assert_eq!(entry.symbols(), "⌘K ⌘S");
    }
}
