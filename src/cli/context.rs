//! CLI context - bundles settings, flags, and the random source.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::clipboard::{Clipboard, Sink};
use crate::entropy::Source;
use crate::notify::Notification;
use crate::pass::{self, Password};
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit with the given process status.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and pick the starting settings (`-d` for defaults,
    /// saved settings otherwise).
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.default && !flags.saved {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_unreadable(&e);
                Settings::default()
            })
        };

        let mut ctx = Self { settings, flags };
        ctx.apply_flags();
        Ok(ctx)
    }

    /// Run CLI. Returns `Err(Done)` for early or failed exits.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        let passwords = self.generate()?;
        self.output(&passwords)
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("classpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(0));
        }
        Ok(())
    }

    /// Apply CLI flags on top of the starting settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if self.flags.avoid_similar {
            self.settings.avoid_similar = true;
        }
        if let Some(ref symbols) = self.flags.symbols {
            self.settings.symbols = symbols.clone();
        }
        if let Some(rng) = self.flags.rng {
            self.settings.rng = rng;
        }
        self.settings.classes = self.flags.resolve_classes(self.settings.classes);
    }

    fn generate(&self) -> Result<Vec<Password>, Done> {
        let config = self.settings.to_config();
        let count = self.flags.number.unwrap_or(1);

        let mut source = Source::new(self.settings.rng).map_err(|e| {
            prompts::rng_unavailable(&e);
            Done(EXIT_FAILURE)
        })?;

        pass::generate_batch(&config, &mut source, count).map_err(|e| {
            log::debug!("rejected config: {e:?}");
            prompts::notify(&Notification::error(e.to_string()));
            Done(EXIT_USAGE)
        })
    }

    fn output(&self, passwords: &[Password]) -> Result<(), Done> {
        if self.flags.clipboard {
            return copy_all(passwords, &mut Clipboard::new());
        }
        print_all(passwords, &mut io::stdout().lock())
    }
}

/// Write one password per line. A closed pipe ends output quietly; any
/// other write error is a failure.
fn print_all(passwords: &[Password], out: &mut impl Write) -> Result<(), Done> {
    let result = passwords
        .iter()
        .try_for_each(|pass| {
            out.write_all(pass.as_str().as_bytes())?;
            out.write_all(b"\n")
        })
        .and_then(|()| out.flush());

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => {
            prompts::error(&format!("Failed to write passwords: {e}"));
            Err(Done(EXIT_FAILURE))
        }
    }
}

fn copy_all(passwords: &[Password], clipboard: &mut impl Sink) -> Result<(), Done> {
    let mut joined = passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let result = clipboard.copy(&joined);
    joined.zeroize();

    match result {
        Ok(method) => {
            log::info!("copied {} password(s) via {method:?}", passwords.len());
            prompts::notify(&Notification::copied());
            Ok(())
        }
        Err(e) => {
            log::warn!("{e}");
            prompts::notify(&Notification::copy_failed());
            prompts::error(&e.to_string());
            Err(Done(EXIT_FAILURE))
        }
    }
}
