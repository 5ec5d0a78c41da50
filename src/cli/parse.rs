use thiserror::Error;

use super::CliFlags;
use crate::pass::{CharClass, ClassSet};

/// Most passwords one `-n` run will build.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid character class '{0}' (expected letters from 'ulns')")]
    InvalidClass(char),
    #[error("Unknown random source: {0} (expected 'os' or 'chacha')")]
    InvalidSource(String),
    #[error("Password count must be between 1 and {max} (got {0})", max = MAX_COUNT)]
    InvalidCount(usize),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-a" | "--avoid-similar" => flags.avoid_similar = true,
            "--no-upper" => flags.disabled.insert(CharClass::Uppercase),
            "--no-lower" => flags.disabled.insert(CharClass::Lowercase),
            "--no-numbers" => flags.disabled.insert(CharClass::Numbers),
            "--no-symbols" => flags.disabled.insert(CharClass::Symbols),
            "-l" | "--length" => {
                let value = value_of(args, &mut i)?;
                flags.length = Some(parse_number(value)?);
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i)?;
                let count = parse_number(value)?;
                if count == 0 || count > MAX_COUNT {
                    return Err(ParseError::InvalidCount(count));
                }
                flags.number = Some(count);
            }
            "-C" | "--classes" => {
                let value = value_of(args, &mut i)?;
                flags.classes = Some(parse_classes(value)?);
            }
            "--symbols" => {
                flags.symbols = Some(value_of(args, &mut i)?.to_string());
            }
            "-r" | "--rng" => {
                let value = value_of(args, &mut i)?;
                flags.rng = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidSource(value.to_string()))?,
                );
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn parse_number(s: &str) -> Result<usize, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

fn parse_classes(s: &str) -> Result<ClassSet, ParseError> {
    s.chars()
        .map(|c| CharClass::from_code(c.to_ascii_lowercase()).ok_or(ParseError::InvalidClass(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SourceKind;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("classpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "-C", "ul", "-a", "--rng", "chacha"]))
            .unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.classes.map(|c| c.codes()), Some("ul".to_string()));
        assert!(flags.avoid_similar);
        assert_eq!(flags.rng, Some(SourceKind::ChaCha));
    }

    #[test]
    fn parses_toggles() {
        let flags = parse(&args(&["--no-symbols", "--no-lower", "-b", "-q"])).unwrap();
        assert_eq!(flags.disabled.codes(), "ls");
        assert!(flags.clipboard);
        assert!(flags.quiet);
    }

    #[test]
    fn symbols_value_is_taken_verbatim() {
        let flags = parse(&args(&["--symbols", "-_."])).unwrap();
        assert_eq!(flags.symbols.as_deref(), Some("-_."));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&args(&["--frobnicate"])).unwrap_err(),
            ParseError::UnknownArg("--frobnicate".into())
        );
        assert_eq!(
            parse(&args(&["-l", "ten"])).unwrap_err(),
            ParseError::InvalidNumber("ten".into())
        );
        assert_eq!(
            parse(&args(&["-l"])).unwrap_err(),
            ParseError::MissingValue("-l".into())
        );
        assert_eq!(
            parse(&args(&["-C", "ux"])).unwrap_err(),
            ParseError::InvalidClass('x')
        );
        assert_eq!(
            parse(&args(&["-r", "rdtsc"])).unwrap_err(),
            ParseError::InvalidSource("rdtsc".into())
        );
    }

    #[test]
    fn count_must_be_in_range() {
        assert_eq!(
            parse(&args(&["-n", "0"])).unwrap_err(),
            ParseError::InvalidCount(0)
        );
        let too_many = (MAX_COUNT + 1).to_string();
        assert_eq!(
            parse(&args(&["-n", &too_many])).unwrap_err(),
            ParseError::InvalidCount(MAX_COUNT + 1)
        );
        let most = MAX_COUNT.to_string();
        assert_eq!(parse(&args(&["-n", &most])).unwrap().number, Some(MAX_COUNT));
    }
}
