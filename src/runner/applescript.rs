//! AppleScript key-injection engine driven through `osascript`.
//!
//! Requires Accessibility permission for the calling process
//! (System Settings > Privacy & Security > Accessibility).

use std::process::Command;
use tracing::{debug, instrument, warn};

use super::{Injector, RunnerError};

/// Consumes the encoded argument list as `argv`.
///
/// Activates the target if it is running (a stopped or missing app is never
/// launched), waits the activation delay, then presses
/// each chord through System Events, one chord at a time.
pub const INJECTION_SCRIPT: &str = r#"on run argv
    set targetId to item 1 of argv
    set activationDelay to (item 2 of argv) as number
    set chordCount to (item 3 of argv) as integer
    if targetId is not "" then
        tell application "System Events"
            set targetRunning to exists (first process whose bundle identifier is targetId)
        end tell
        if targetRunning then
            tell application id targetId to activate
        end if
    end if
    delay activationDelay
    set argIndex to 4
    tell application "System Events"
        repeat chordCount times
            set modifierCount to (item argIndex of argv) as integer
            set argIndex to argIndex + 1
            set modifierList to {}
            repeat modifierCount times
                set modifierName to item argIndex of argv
                if modifierName is "control down" then
                    set end of modifierList to control down
                else if modifierName is "shift down" then
                    set end of modifierList to shift down
                else if modifierName is "option down" then
                    set end of modifierList to option down
                else if modifierName is "command down" then
                    set end of modifierList to command down
                end if
                set argIndex to argIndex + 1
            end repeat
            set chordKeyCode to (item argIndex of argv) as integer
            set argIndex to argIndex + 1
            key code chordKeyCode using modifierList
            delay 0.05
        end repeat
    end tell
end run"#;

/// Runs [`INJECTION_SCRIPT`] with `osascript`.
#[derive(Clone, Debug)]
pub struct AppleScriptInjector {
    program: String,
}

impl Default for AppleScriptInjector {
    fn default() -> Self {
        Self {
            program: "osascript".to_string(),
        }
    }
}

impl AppleScriptInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different interpreter binary (e.g., an absolute path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: &[String]) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-e").arg(INJECTION_SCRIPT).args(args);
        command
    }
}

impl Injector for AppleScriptInjector {
    #[instrument(skip_all, fields(arg_count = args.len()))]
    fn inject(&self, args: &[String]) -> Result<(), RunnerError> {
        let output = self
            .command(args)
            .output()
            .map_err(|e| RunnerError::Spawn(format!("{}: {}", self.program, e)))?;

        if output.status.success() {
            debug!("osascript finished");
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = ?output.status.code(), stderr = %stderr, "osascript failed");
            Err(RunnerError::Injection {
                status: output.status.code(),
                stderr,
            })
        }
    }
}
