use super::*;
use crate::shortcuts::input::{InputApp, InputKeymap, InputSection, InputShortcut};
use crate::shortcuts::types::KeyCodes;

/// Key codes for the letters used below plus a couple of named keys.
fn key_codes() -> KeyCodes {
    [("e", "14"), ("k", "40"), ("s", "1"), ("f1", "122"), ("enter", "36")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn app_with_keys(keys: &[&str]) -> InputApp {
    InputApp {
        bundle_id: Some("com.example.app".to_string()),
        hostname: None,
        name: "Example".to_string(),
        slug: "example".to_string(),
        keymaps: vec![InputKeymap {
            title: "Default".to_string(),
            sections: vec![InputSection {
                title: "General".to_string(),
                shortcuts: keys
                    .iter()
                    .enumerate()
                    .map(|(i, k)| InputShortcut::new(format!("shortcut {i}"), *k))
                    .collect(),
            }],
        }],
    }
}

fn check(key: &str) -> Result<(), ValidationError> {
    validate(&key_codes(), &[app_with_keys(&[key])])
}

// ============================================
// REJECTIONS
// ============================================

#[test]
fn test_unknown_modifier() {
    assert_eq!(
        check("abc+e"),
        Err(ValidationError::UnknownModifier("abc+e".to_string()))
    );
}

#[test]
fn test_modifier_is_case_sensitive() {
    assert_eq!(
        check("Ctrl+e"),
        Err(ValidationError::UnknownModifier("Ctrl+e".to_string()))
    );
}

#[test]
fn test_unknown_base_key_emoji() {
    assert_eq!(
        check("cmd+💩"),
        Err(ValidationError::UnknownBaseKey("cmd+💩".to_string()))
    );
}

#[test]
fn test_trailing_plus_is_unknown_base_key() {
    assert_eq!(
        check("cmd+"),
        Err(ValidationError::UnknownBaseKey("cmd+".to_string()))
    );
}

#[test]
fn test_base_key_is_case_sensitive() {
    assert_eq!(
        check("cmd+E"),
        Err(ValidationError::UnknownBaseKey("cmd+E".to_string()))
    );
}

#[test]
fn test_lone_modifier_is_missing_base_key() {
    assert_eq!(
        check("ctrl"),
        Err(ValidationError::MissingBaseKey("ctrl".to_string()))
    );
}

#[test]
fn test_all_modifiers_without_base() {
    assert_eq!(
        check("ctrl+shift+opt+cmd"),
        Err(ValidationError::MissingBaseKey("ctrl+shift+opt+cmd".to_string()))
    );
}

#[test]
fn test_double_space_reports_full_key() {
    assert_eq!(
        check("cmd+e  +e"),
        Err(ValidationError::InvalidShortcut("cmd+e  +e".to_string()))
    );
    let err = validate_key(&key_codes(), "e  e").unwrap_err();
    assert_eq!(err.to_string(), "Invalid shortcut \"e  e\"");
}

#[test]
fn test_trailing_space_reports_full_key() {
    assert_eq!(
        check("cmd+e "),
        Err(ValidationError::InvalidShortcut("cmd+e ".to_string()))
    );
}

#[test]
fn test_space_before_plus_is_invalid_shortcut() {
    // "cmd+e +e" splits into "cmd+e" and "+e"; the latter has an empty modifier token.
    assert_eq!(
        check("cmd+e +e"),
        Err(ValidationError::InvalidShortcut("+e".to_string()))
    );
}

#[test]
fn test_leading_plus_is_invalid_shortcut() {
    assert_eq!(
        check("+e"),
        Err(ValidationError::InvalidShortcut("+e".to_string()))
    );
}

#[test]
fn test_empty_interior_token_is_invalid_shortcut() {
    assert_eq!(
        check("cmd++e"),
        Err(ValidationError::InvalidShortcut("cmd++e".to_string()))
    );
}

#[test]
fn test_error_in_second_chord_reports_full_key() {
    assert_eq!(
        check("cmd+k cmd+x"),
        Err(ValidationError::UnknownBaseKey("cmd+k cmd+x".to_string()))
    );
}

#[test]
fn test_first_violation_wins() {
    let app = app_with_keys(&["cmd+e", "abc+e", "cmd+E"]);
    assert_eq!(
        validate(&key_codes(), &[app]),
        Err(ValidationError::UnknownModifier("abc+e".to_string()))
    );
}

#[test]
fn test_error_messages_embed_key() {
    assert_eq!(
        ValidationError::MissingBaseKey("ctrl".to_string()).to_string(),
        "Shortcut \"ctrl\" ends with a modifier"
    );
    assert_eq!(
        ValidationError::UnknownModifier("abc+e".to_string()).offending(),
        "abc+e"
    );
}

// ============================================
// ACCEPTANCE
// ============================================

#[test]
fn test_accepts_every_modifier_permutation() {
    let tokens = ["ctrl", "shift", "opt", "cmd"];
    let mut keys = Vec::new();
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let picked = [a, b, c, d];
                    let mut unique = picked.to_vec();
                    unique.sort_unstable();
                    unique.dedup();
                    if unique.len() == 4 {
                        let mods: Vec<&str> = picked.iter().map(|&i| tokens[i]).collect();
                        keys.push(format!("{}+e", mods.join("+")));
                    }
                }
            }
        }
    }
    assert_eq!(keys.len(), 24);
    for key in keys {
        assert_eq!(check(&key), Ok(()), "{key} should be accepted");
    }
}

#[test]
fn test_accepts_long_macro() {
    let key = "ctrl+shift+opt+cmd+e ctrl+opt+cmd+e shift+opt+e ctrl+shift+e opt+cmd+e \
               ctrl+cmd+e ctrl+shift+opt+e ctrl+shift+cmd+e ctrl+opt+cmd+e shift+opt+cmd+e";
    assert_eq!(check(key), Ok(()));
}

#[test]
fn test_accepts_named_keys() {
    assert_eq!(check("f1"), Ok(()));
    assert_eq!(check("shift+enter"), Ok(()));
}

#[test]
fn test_comment_only_shortcut_is_exempt() {
    let mut app = app_with_keys(&[]);
    app.keymaps[0].sections[0]
        .shortcuts
        .push(InputShortcut::comment_only("Drag", "Drag the tab"));
    assert_eq!(validate(&key_codes(), &[app]), Ok(()));
}

#[test]
fn test_empty_key_with_comment_is_exempt() {
    let mut app = app_with_keys(&[]);
    app.keymaps[0].sections[0].shortcuts.push(InputShortcut {
        title: "Drag".to_string(),
        key: Some(String::new()),
        comment: Some("Drag the tab".to_string()),
    });
    assert_eq!(validate(&key_codes(), &[app]), Ok(()));
}

#[test]
fn test_validate_key_without_catalog() {
    assert_eq!(validate_key(&key_codes(), "cmd+k cmd+s"), Ok(()));
}
