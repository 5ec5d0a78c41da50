//! Generation parameters, independent of where they were collected from.

use super::charset::{self, CharClass, ClassSet, SYMBOLS};
use super::error::InvalidConfig;

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
    pub avoid_similar: bool,
    /// Alphabet used for [`CharClass::Symbols`].
    pub symbols: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            classes: ClassSet::all(),
            avoid_similar: false,
            symbols: SYMBOLS.to_string(),
        }
    }
}

impl GenerationConfig {
    pub fn alphabet(&self, class: CharClass) -> &str {
        match class {
            CharClass::Symbols => &self.symbols,
            other => other.alphabet(),
        }
    }

    /// Effective alphabets of the enabled classes, in fixed class order.
    /// Classes emptied by the similar-glyph filter are left out.
    ///
    /// Custom symbols that already belong to another enabled class are
    /// dropped from the symbol pool, so no character appears twice in the
    /// combined charset and a symbol hit always means a real symbol.
    pub fn pools(&self) -> Vec<(CharClass, Vec<char>)> {
        self.classes
            .iter()
            .map(|class| {
                let mut pool = charset::effective(self.alphabet(class), self.avoid_similar);
                if class == CharClass::Symbols {
                    pool.retain(|c| !self.in_builtin_class(*c));
                }
                (class, pool)
            })
            .filter(|(_, pool)| !pool.is_empty())
            .collect()
    }

    fn in_builtin_class(&self, c: char) -> bool {
        self.classes
            .iter()
            .filter(|class| *class != CharClass::Symbols)
            .any(|class| class.alphabet().contains(c))
    }

    /// Checks everything that does not depend on the random source.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.classes.is_empty() {
            return Err(InvalidConfig::NoClassSelected);
        }
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(InvalidConfig::InvalidLength(self.length));
        }
        if self.classes.contains(CharClass::Symbols)
            && let Some(c) = self
                .symbols
                .chars()
                .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(InvalidConfig::InvalidSymbol(c));
        }
        Ok(())
    }

    /// Replace the symbol alphabet, dropping duplicates.
    pub fn with_symbols(mut self, symbols: &str) -> Self {
        self.symbols = charset::dedup(symbols);
        self
    }
}
