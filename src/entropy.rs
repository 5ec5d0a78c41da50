//! Cryptographically secure random sources for password generation.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Every draw is read from the operating system.
    #[default]
    Os,
    /// ChaCha20 stream seeded once from the operating system.
    ChaCha,
}

impl SourceKind {
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Os => "os",
            SourceKind::ChaCha => "chacha",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SourceKind::Os => "OS entropy (getrandom)",
            SourceKind::ChaCha => "ChaCha20, seeded from OS",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SourceKind::Os => SourceKind::ChaCha,
            SourceKind::ChaCha => SourceKind::Os,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "os" | "urandom" => Ok(SourceKind::Os),
            "chacha" | "chacha20" => Ok(SourceKind::ChaCha),
            other => Err(other.to_string()),
        }
    }
}

pub enum Source {
    Os(OsRng),
    ChaCha(Box<ChaCha20Rng>),
}

impl Source {
    pub fn new(kind: SourceKind) -> Result<Self, rand::Error> {
        let source = match kind {
            SourceKind::Os => Source::Os(OsRng),
            SourceKind::ChaCha => Source::ChaCha(Box::new(ChaCha20Rng::from_rng(OsRng)?)),
        };
        log::debug!("random source: {}", kind.description());
        Ok(source)
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Os(_) => SourceKind::Os,
            Source::ChaCha(_) => SourceKind::ChaCha,
        }
    }
}

impl RngCore for Source {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Os(r) => r.next_u32(),
            Source::ChaCha(r) => r.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Os(r) => r.next_u64(),
            Source::ChaCha(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Source::Os(r) => r.fill_bytes(dest),
            Source::ChaCha(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Source::Os(r) => r.try_fill_bytes(dest),
            Source::ChaCha(r) => r.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for Source {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_names() {
        assert_eq!("os".parse::<SourceKind>(), Ok(SourceKind::Os));
        assert_eq!("ChaCha20".parse::<SourceKind>(), Ok(SourceKind::ChaCha));
        assert_eq!("rdtsc".parse::<SourceKind>(), Err("rdtsc".to_string()));
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(SourceKind::Os.toggled(), SourceKind::ChaCha);
        assert_eq!(SourceKind::Os.toggled().toggled(), SourceKind::Os);
    }

    #[test]
    fn sources_report_their_kind() {
        for kind in [SourceKind::Os, SourceKind::ChaCha] {
            let mut source = Source::new(kind).unwrap();
            assert_eq!(source.kind(), kind);
            let mut buf = [0u8; 32];
            source.fill_bytes(&mut buf);
            assert_ne!(buf, [0u8; 32]);
        }
    }
}
