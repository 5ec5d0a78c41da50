//! Generator preferences. Generated passwords are never stored.

mod file;

use std::path::{Path, PathBuf};

use crate::entropy::SourceKind;
use crate::pass::{ClassSet, GenerationConfig, charset};

pub use file::config_path;

/// Bounds of the interactive length slider.
pub const SLIDER_MIN: usize = 4;
pub const SLIDER_MAX: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub avoid_similar: bool,
    pub symbols: String,
    pub auto_copy: bool,
    pub rng: SourceKind,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<PathBuf, std::io::Error> {
        let path = config_path();
        file::save(self, &path)?;
        Ok(path)
    }

    /// Snapshot the current preferences as a generation request.
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.pass_length,
            classes: self.classes,
            avoid_similar: self.avoid_similar,
            ..Default::default()
        }
        .with_symbols(&self.symbols)
    }

    /// Move the slider by `delta`, clamped to its range.
    pub fn nudge_length(&mut self, delta: isize) {
        let next = self.pass_length.saturating_add_signed(delta);
        self.pass_length = next.clamp(SLIDER_MIN, SLIDER_MAX);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            classes: ClassSet::all(),
            avoid_similar: false,
            symbols: charset::SYMBOLS.to_string(),
            auto_copy: true,
            rng: SourceKind::Os,
        }
    }
}
