//! Character classes, their alphabets, and the similar-glyph filter.

use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easy to confuse with one another in common fonts.
pub const SIMILAR: &str = "0Oo1Il|i5S2Zz8B6bG9gqCcPpVvWwXxUunmrtf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Every class, in the order charsets are concatenated and repaired.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// Built-in alphabet. Symbols may be overridden per config.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Single-letter code used by `--classes` and the settings file.
    pub fn code(self) -> char {
        match self {
            CharClass::Uppercase => 'u',
            CharClass::Lowercase => 'l',
            CharClass::Numbers => 'n',
            CharClass::Symbols => 's',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.code() == c)
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Uppercase => 1,
            CharClass::Lowercase => 1 << 1,
            CharClass::Numbers => 1 << 2,
            CharClass::Symbols => 1 << 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "Uppercase",
            CharClass::Lowercase => "Lowercase",
            CharClass::Numbers => "Numbers",
            CharClass::Symbols => "Symbols",
        };
        f.write_str(name)
    }
}

/// Set of enabled classes. Iteration always follows [`CharClass::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Letter codes of the enabled classes, e.g. `"uln"`.
    pub fn codes(self) -> String {
        self.iter().map(CharClass::code).collect()
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

pub fn is_similar(c: char) -> bool {
    SIMILAR.contains(c)
}

/// Alphabet after the optional similar-glyph filter.
pub fn effective(alphabet: &str, avoid_similar: bool) -> Vec<char> {
    alphabet
        .chars()
        .filter(|c| !(avoid_similar && is_similar(*c)))
        .collect()
}

/// Drop repeated characters, keeping the first occurrence.
pub fn dedup(chars: &str) -> String {
    let mut out = String::with_capacity(chars.len());
    for c in chars.chars() {
        if !out.contains(c) {
            out.push(c);
        }
    }
    out
}
