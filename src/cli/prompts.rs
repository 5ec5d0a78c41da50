//! Centralized warning, error, and notification output for the CLI.

use super::quiet;
use crate::notify::{Kind, Notification};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Route a notification: successes to stdout (quiet-suppressible), errors to stderr.
pub fn notify(notification: &Notification) {
    match notification.kind {
        Kind::Error => error(&notification.message),
        Kind::Success if quiet::enabled() => {}
        // Passwords may be piped; keep status off stdout unless it's a terminal.
        Kind::Success if !quiet::stdout_is_tty() => eprintln!("{}", notification.message),
        Kind::Success => println!("{GREEN}{}{RESET}", notification.message),
    }
}

pub fn settings_unreadable(err: &std::io::Error) {
    warn(&format!("Failed to load settings: {err}. Using defaults."));
}

pub fn rng_unavailable(err: &impl std::fmt::Display) {
    error(&format!("Random source unavailable: {err}"));
}
