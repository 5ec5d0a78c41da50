//! Quiet mode and tty detection for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdout is a terminal. Colour codes are only emitted when it is.
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}
