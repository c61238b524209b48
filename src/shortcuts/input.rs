//! Raw catalog records as supplied by the catalog source.
//!
//! These mirror the JSON document one-to-one; nothing here is validated.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputApp {
    /// Desktop application identifier (e.g., "com.apple.Safari")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// Web application identifier (e.g., "github.com")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub keymaps: Vec<InputKeymap>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputKeymap {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<InputSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSection {
    pub title: String,
    #[serde(default)]
    pub shortcuts: Vec<InputShortcut>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputShortcut {
    pub title: String,
    /// Key string such as "cmd+k cmd+s". Absent for documentation-only entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl InputShortcut {
    pub fn new(title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: Some(key.into()),
            comment: None,
        }
    }

    pub fn comment_only(title: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: None,
            comment: Some(comment.into()),
        }
    }

    /// The key string, or `None` for documentation-only entries.
    ///
    /// An empty `key` is treated the same as a missing one.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Iterate every shortcut of an app together with its keymap and section.
pub(crate) fn shortcuts_of(
    app: &InputApp,
) -> impl Iterator<Item = (&InputKeymap, &InputSection, &InputShortcut)> {
    app.keymaps.iter().flat_map(|keymap| {
        keymap.sections.iter().flat_map(move |section| {
            section
                .shortcuts
                .iter()
                .map(move |shortcut| (keymap, section, shortcut))
        })
    })
}
