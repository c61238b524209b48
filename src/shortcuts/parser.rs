//! Structural transform from raw catalog records to the parsed model.

use super::input::{InputApp, InputKeymap, InputSection, InputShortcut};
use super::modifier::Modifier;
use super::types::{Application, AtomicShortcut, KeyCodes, Keymap, Section, SectionShortcut};
use super::validator::{validate, ValidationError};

/// Parse raw apps into the model.
///
/// Never fails. Input is expected to be validated already: unknown modifier
/// tokens are dropped and the last token of each chord is kept verbatim as
/// the base key. Use [`parse_validated`] when validation is not guaranteed.
pub fn parse(apps: &[InputApp]) -> Vec<Application> {
    apps.iter().map(parse_app).collect()
}

/// Validate against `key_codes`, then parse.
pub fn parse_validated(
    key_codes: &KeyCodes,
    apps: &[InputApp],
) -> Result<Vec<Application>, ValidationError> {
    validate(key_codes, apps)?;
    Ok(parse(apps))
}

pub fn parse_app(app: &InputApp) -> Application {
    Application {
        bundle_id: app.bundle_id.clone(),
        hostname: app.hostname.clone(),
        name: app.name.clone(),
        slug: app.slug.clone(),
        keymaps: app.keymaps.iter().map(parse_keymap).collect(),
    }
}

fn parse_keymap(keymap: &InputKeymap) -> Keymap {
    Keymap {
        title: keymap.title.clone(),
        sections: keymap.sections.iter().map(parse_section).collect(),
    }
}

fn parse_section(section: &InputSection) -> Section {
    Section {
        title: section.title.clone(),
        shortcuts: section.shortcuts.iter().map(parse_shortcut).collect(),
    }
}

fn parse_shortcut(shortcut: &InputShortcut) -> SectionShortcut {
    SectionShortcut {
        title: shortcut.title.clone(),
        sequence: shortcut.key().map(parse_key).unwrap_or_default(),
        comment: shortcut.comment.clone(),
    }
}

/// Parse one key string into its chord sequence.
pub fn parse_key(key: &str) -> Vec<AtomicShortcut> {
    key.split(' ').map(parse_chord).collect()
}

fn parse_chord(chord: &str) -> AtomicShortcut {
    let mut tokens: Vec<&str> = chord.split('+').collect();
    let base = tokens.pop().unwrap_or_default();
    AtomicShortcut::new(
        base,
        tokens.into_iter().filter_map(Modifier::from_token),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::input::{InputKeymap, InputSection};

    fn app_with(shortcuts: Vec<InputShortcut>) -> InputApp {
        InputApp {
            bundle_id: Some("some-bundle-id".to_string()),
            hostname: None,
            name: "Test App".to_string(),
            slug: "test-app".to_string(),
            keymaps: vec![InputKeymap {
                title: "Default".to_string(),
                sections: vec![InputSection {
                    title: "General".to_string(),
                    shortcuts,
                }],
            }],
        }
    }

    fn key_codes() -> KeyCodes {
        [("e", "14"), ("k", "40"), ("s", "1")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_bare_base_key() {
        assert_eq!(parse_key("e"), vec![AtomicShortcut::new("e", [])]);
    }

    #[test]
    fn parses_single_modifier() {
        let parsed = parse_key("cmd+e");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].base, "e");
        assert_eq!(parsed[0].modifiers.as_slice(), &[Modifier::Command]);
    }

    #[test]
    fn parses_macro_into_ordered_chords() {
        let parsed = parse_key("cmd+k cmd+s");
        assert_eq!(
            parsed,
            vec![
                AtomicShortcut::new("k", [Modifier::Command]),
                AtomicShortcut::new("s", [Modifier::Command]),
            ]
        );
    }

    #[test]
    fn chord_count_and_base_follow_input() {
        let key = "ctrl+shift+opt+cmd+e ctrl+opt+cmd+e shift+opt+e ctrl+shift+e opt+cmd+e";
        let parsed = parse_key(key);
        let chords: Vec<&str> = key.split(' ').collect();
        assert_eq!(parsed.len(), chords.len());
        for (chord, raw) in parsed.iter().zip(chords) {
            assert_eq!(chord.base, raw.rsplit('+').next().unwrap());
        }
    }

    #[test]
    fn out_of_order_modifiers_come_back_canonical() {
        let parsed = parse_key("cmd+opt+shift+ctrl+e");
        assert_eq!(
            parsed[0].modifiers.as_slice(),
            &[
                Modifier::Control,
                Modifier::Shift,
                Modifier::Option,
                Modifier::Command
            ]
        );
    }

    #[test]
    fn unknown_modifiers_are_dropped() {
        let parsed = parse_key("abc+cmd+e");
        assert_eq!(parsed[0].modifiers.as_slice(), &[Modifier::Command]);
        assert_eq!(parsed[0].base, "e");
    }

    #[test]
    fn comment_only_shortcut_has_empty_sequence() {
        let apps = vec![app_with(vec![InputShortcut::comment_only(
            "Drag",
            "Drag the tab out",
        )])];
        let parsed = parse(&apps);
        let shortcut = &parsed[0].keymaps[0].sections[0].shortcuts[0];
        assert!(shortcut.sequence.is_empty());
        assert_eq!(shortcut.comment.as_deref(), Some("Drag the tab out"));
    }

    #[test]
    fn empty_key_shortcut_has_empty_sequence() {
        let apps = vec![app_with(vec![InputShortcut {
            title: "Drag".to_string(),
            key: Some(String::new()),
            comment: Some("Drag the tab out".to_string()),
        }])];
        let parsed = parse_validated(&key_codes(), &apps).unwrap();
        let shortcut = &parsed[0].keymaps[0].sections[0].shortcuts[0];
        assert!(shortcut.sequence.is_empty());
        assert!(!shortcut.is_executable());
    }

    #[test]
    fn parse_keeps_hierarchy_and_metadata() {
        let apps = vec![app_with(vec![InputShortcut::new("Save", "cmd+s")])];
        let parsed = parse(&apps);
        let app = &parsed[0];
        assert_eq!(app.bundle_id.as_deref(), Some("some-bundle-id"));
        assert_eq!(app.slug, "test-app");
        assert_eq!(app.keymaps[0].title, "Default");
        assert_eq!(app.keymaps[0].sections[0].title, "General");
        assert_eq!(
            app.find_shortcut("Save").map(|s| s.sequence.clone()),
            Some(vec![AtomicShortcut::new("s", [Modifier::Command])])
        );
    }

    #[test]
    fn parsing_twice_is_structurally_equal() {
        let apps = vec![app_with(vec![
            InputShortcut::new("Save", "cmd+s"),
            InputShortcut::new("Chord", "cmd+k cmd+s"),
        ])];
        assert_eq!(parse(&apps), parse(&apps));
    }

    #[test]
    fn parse_validated_rejects_invalid_catalog() {
        let apps = vec![app_with(vec![InputShortcut::new("Bad", "abc+e")])];
        assert_eq!(
            parse_validated(&key_codes(), &apps),
            Err(ValidationError::UnknownModifier("abc+e".to_string()))
        );
    }

    #[test]
    fn parse_validated_accepts_valid_catalog() {
        let apps = vec![app_with(vec![InputShortcut::new("Chord", "cmd+k cmd+s")])];
        let parsed = parse_validated(&key_codes(), &apps).unwrap();
        assert_eq!(parsed[0].shortcuts().count(), 1);
    }
}
