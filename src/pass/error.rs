use thiserror::Error;

use super::config::MAX_LENGTH;

/// A configuration the generator cannot build a password from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("Please select at least one character type")]
    NoClassSelected,
    #[error("Password length must be between 1 and {max} (got {0})", max = MAX_LENGTH)]
    InvalidLength(usize),
    #[error("No characters left to choose from after removing similar characters")]
    EmptyAlphabet,
    #[error("Symbol set may not contain whitespace or control characters (found {0:?})")]
    InvalidSymbol(char),
}
