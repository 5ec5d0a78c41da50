//! Interactive password screen.

mod app;
mod input;
mod text;

use std::time::Instant;

pub use app::{Action, App};
pub use input::*;
pub use text::*;

use crate::cli::prompts;
use crate::entropy::Source;
use crate::settings::Settings;
use crate::terminal::{clear, hide_cursor, reset_terminal};

/// Run TUI interactive mode.
pub fn run() -> i32 {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::settings_unreadable(&e);
        Settings::default()
    });
    let source = match Source::new(settings.rng) {
        Ok(source) => source,
        Err(e) => {
            prompts::rng_unavailable(&e);
            return 1;
        }
    };

    let mut app = App::new(settings, source);
    reset_terminal();
    hide_cursor();

    // First password on load.
    app.generate();

    loop {
        draw(&app);

        let timeout = app.notification_timeout(Instant::now());
        match next_action(timeout) {
            Ok(Some(action)) => {
                if !app.apply(action) {
                    break;
                }
            }
            Ok(None) => {
                app.expire(Instant::now());
            }
            Err(e) => {
                reset_terminal();
                prompts::error(&format!("Terminal error: {e}"));
                return 1;
            }
        }
    }

    // Drop the password before the screen goes so it is wiped promptly.
    app.password = None;
    clear();
    reset_terminal();
    0
}
