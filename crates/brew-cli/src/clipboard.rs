//! System clipboard integration.
//!
//! There is no portable clipboard in a terminal process, so the copy
//! export probes the usual platform tools in order (pbcopy on macOS,
//! wl-copy on Wayland, xclip on X11) and pipes the text to the first one
//! that accepts it. When none is usable the failure is reported as
//! `ClipboardUnavailable` and nothing else changes.

use std::io::Write;
use std::process::{Command, Stdio};

use brew_core::{BookingError, Clipboard, Result};
use log::debug;

const TOOLS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
];

/// Clipboard backed by whichever platform tool is present.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        for tool in TOOLS {
            if try_tool(tool, text) {
                debug!("copied text via {}", tool[0]);
                return Ok(());
            }
        }
        Err(BookingError::clipboard(
            "no clipboard tool found (tried pbcopy, wl-copy, xclip)",
        ))
    }
}

fn try_tool(tool: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(tool[0])
        .args(&tool[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    if let Some(stdin) = child.stdin.as_mut() {
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
    }
    matches!(child.wait(), Ok(status) if status.success())
}
