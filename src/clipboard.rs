//! Clipboard output: system clipboard first, terminal OSC 52 as fallback.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

/// Which mechanism placed the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    System,
    Terminal,
}

#[derive(Debug, Error)]
#[error("clipboard unavailable ({primary}); terminal fallback failed ({fallback})")]
pub struct ClipboardUnavailable {
    pub primary: String,
    pub fallback: String,
}

/// Anything that can place text on a clipboard.
pub trait Sink {
    fn copy(&mut self, text: &str) -> Result<Method, ClipboardUnavailable>;
}

/// Holds the system clipboard context for as long as the caller keeps it,
/// so the selection stays owned on X11.
pub struct Clipboard {
    system: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        let system = match ClipboardContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::debug!("system clipboard unavailable: {e}");
                None
            }
        };
        Self { system }
    }

    pub fn copy(&mut self, text: &str) -> Result<Method, ClipboardUnavailable> {
        copy_with(text, |t| self.copy_system(t), copy_terminal)
    }

    fn copy_system(&mut self, text: &str) -> Result<(), String> {
        let ctx = self
            .system
            .as_mut()
            .ok_or_else(|| "no system clipboard".to_string())?;
        ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())?;
        // Reading back forces some providers to take ownership of the selection.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

impl Sink for Clipboard {
    fn copy(&mut self, text: &str) -> Result<Method, ClipboardUnavailable> {
        Clipboard::copy(self, text)
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Try `primary`, and only if it fails, `fallback`.
fn copy_with<P, F>(text: &str, primary: P, fallback: F) -> Result<Method, ClipboardUnavailable>
where
    P: FnOnce(&str) -> Result<(), String>,
    F: FnOnce(&str) -> io::Result<()>,
{
    let primary = match primary(text) {
        Ok(()) => return Ok(Method::System),
        Err(e) => e,
    };
    log::info!("system clipboard failed ({primary}), trying terminal");

    match fallback(text) {
        Ok(()) => Ok(Method::Terminal),
        Err(e) => Err(ClipboardUnavailable {
            primary,
            fallback: e.to_string(),
        }),
    }
}

/// OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

fn copy_terminal(text: &str) -> io::Result<()> {
    if unsafe { libc::isatty(1) } != 1 {
        return Err(io::Error::other("stdout is not a terminal"));
    }
    let mut seq = osc52_sequence(text);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = out.write_all(seq.as_bytes()).and_then(|_| out.flush());
    seq.zeroize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hunter2"), "\x1b]52;c;aHVudGVyMg==\x07");
    }

    #[test]
    fn system_clipboard_is_tried_first() {
        let method = copy_with(
            "pw",
            |_| Ok(()),
            |_| panic!("fallback must not run when the system clipboard works"),
        );
        assert_eq!(method.unwrap(), Method::System);
    }

    #[test]
    fn terminal_used_when_system_fails() {
        let mut seen = String::new();
        let method = copy_with(
            "pw",
            |_| Err("no display".into()),
            |t| {
                seen.push_str(t);
                Ok(())
            },
        );
        assert_eq!(method.unwrap(), Method::Terminal);
        assert_eq!(seen, "pw");
    }

    #[test]
    fn both_failing_is_unavailable() {
        let err = copy_with(
            "pw",
            |_| Err("no display".into()),
            |_| Err(io::Error::other("not a tty")),
        )
        .unwrap_err();
        assert_eq!(err.primary, "no display");
        assert_eq!(err.fallback, "not a tty");
    }

    #[test]
    fn unavailable_reports_both_failures() {
        let err = ClipboardUnavailable {
            primary: "no system clipboard".into(),
            fallback: "stdout is not a terminal".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("no system clipboard"));
        assert!(msg.contains("stdout is not a terminal"));
    }
}
