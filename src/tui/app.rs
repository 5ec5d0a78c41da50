//! Interactive screen state and the actions that change it.

use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::entropy::Source;
use crate::notify::Notification;
use crate::pass::{self, CharClass, Password};
use crate::settings::Settings;

/// How long a notification banner stays up.
pub const NOTIFY_FOR: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    Length(isize),
    Toggle(CharClass),
    ToggleSimilar,
    ToggleAutoCopy,
    ToggleRng,
    Save,
    Help,
    Quit,
}

pub struct App {
    pub settings: Settings,
    pub password: Option<Password>,
    pub show_help: bool,
    notification: Option<(Notification, Instant)>,
    source: Source,
    clipboard: Option<Clipboard>,
}

impl App {
    pub fn new(settings: Settings, source: Source) -> Self {
        Self {
            settings,
            password: None,
            show_help: false,
            notification: None,
            source,
            clipboard: None,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|(n, _)| n)
    }

    /// Time left before the current banner should disappear.
    pub fn notification_timeout(&self, now: Instant) -> Option<Duration> {
        self.notification
            .as_ref()
            .map(|(_, shown)| NOTIFY_FOR.saturating_sub(now.duration_since(*shown)))
    }

    /// Drop the banner once it has been up for [`NOTIFY_FOR`].
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.notification_timeout(now) == Some(Duration::ZERO) {
            self.notification = None;
            return true;
        }
        false
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some((notification, Instant::now()));
    }

    /// Apply one action. Returns false when the app should exit.
    pub fn apply(&mut self, action: Action) -> bool {
        if action != Action::Help {
            self.show_help = false;
        }
        match action {
            Action::Generate => self.generate(),
            Action::Copy => self.copy(),
            Action::Length(delta) => self.settings.nudge_length(delta),
            Action::Toggle(class) => self.settings.classes.toggle(class),
            Action::ToggleSimilar => self.settings.avoid_similar ^= true,
            Action::ToggleAutoCopy => self.settings.auto_copy ^= true,
            Action::ToggleRng => self.switch_source(),
            Action::Save => self.save(),
            Action::Help => self.show_help ^= true,
            Action::Quit => return false,
        }
        true
    }

    /// Build a new password from the current settings. A rejected config
    /// leaves the previous password in place.
    pub fn generate(&mut self) {
        let config = self.settings.to_config();
        match pass::generate(&config, &mut self.source) {
            Ok(password) => {
                self.password = Some(password);
                if self.settings.auto_copy {
                    self.copy();
                }
            }
            Err(e) => {
                log::debug!("rejected config: {e:?}");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    pub fn copy(&mut self) {
        let Some(password) = self.password.as_ref().filter(|p| !p.is_empty()) else {
            return;
        };
        let clipboard = self.clipboard.get_or_insert_with(Clipboard::new);
        let notification = match clipboard.copy(password.as_str()) {
            Ok(method) => {
                log::info!("password copied via {method:?}");
                Notification::copied()
            }
            Err(e) => {
                log::warn!("{e}");
                Notification::copy_failed()
            }
        };
        self.notify(notification);
    }

    fn switch_source(&mut self) {
        let kind = self.settings.rng.toggled();
        match Source::new(kind) {
            Ok(source) => {
                self.source = source;
                self.settings.rng = kind;
            }
            Err(e) => self.notify(Notification::error(format!("Random source unavailable: {e}"))),
        }
    }

    fn save(&mut self) {
        let notification = match self.settings.save_to_file() {
            Ok(path) => Notification::success(format!("Settings saved to {}", path.display())),
            Err(e) => Notification::error(format!("Error saving settings: {e}")),
        };
        self.notify(notification);
    }
}
