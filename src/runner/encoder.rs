//! Argument encoding for the key-injection engine.
//!
//! Layout (every slot is a string):
//!
//! ```text
//! [ targetId-or-empty, delaySeconds, N,
//!   M1, mod1_1..mod1_M1, code1,
//!   ...
//!   MN, modN_1..modN_MN, codeN ]
//! ```

use tracing::debug;

use super::RunnerError;
use crate::shortcuts::{AtomicShortcut, KeyCodes};

/// Encode a chord sequence into the engine's argument list.
///
/// `target_id` of `None` encodes as an empty string, meaning "activate nothing".
/// Every base key must be present in `key_codes`.
pub fn build_arguments(
    target_id: Option<&str>,
    delay_seconds: f64,
    sequence: &[AtomicShortcut],
    key_codes: &KeyCodes,
) -> Result<Vec<String>, RunnerError> {
    let mut args = Vec::with_capacity(3 + sequence.len() * 3);
    args.push(target_id.unwrap_or_default().to_string());
    args.push(format_delay(delay_seconds));
    args.push(sequence.len().to_string());

    for chord in sequence {
        let code = key_codes
            .get(&chord.base)
            .ok_or_else(|| RunnerError::UnknownKeyCode(chord.base.clone()))?;

        args.push(chord.modifiers.len().to_string());
        args.extend(chord.modifiers.iter().map(|m| m.runtime_token().to_string()));
        args.push(code.clone());

        debug!(chord = %chord, key_code = %code, "Encoded chord");
    }

    Ok(args)
}

/// Shortest decimal form: `0.5`, `1`, `0`.
fn format_delay(delay_seconds: f64) -> String {
    format!("{}", delay_seconds)
}
