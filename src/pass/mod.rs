//! Password construction: charsets, configuration, and generation.

pub mod charset;
mod config;
mod error;
mod generate;

use std::fmt;

use zeroize::Zeroizing;

pub use charset::{CharClass, ClassSet};
pub use config::{GenerationConfig, MAX_LENGTH};
pub use error::InvalidConfig;
pub use generate::{generate, generate_batch};

/// A generated password. The buffer is wiped when dropped.
pub struct Password(Zeroizing<String>);

impl Password {
    fn from_chars(chars: &[char]) -> Self {
        let mut s = String::with_capacity(chars.len() * 4);
        s.extend(chars);
        Password(Zeroizing::new(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}
