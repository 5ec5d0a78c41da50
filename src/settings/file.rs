//! Settings file persistence.
//!
//! One line, comma separated. `|` escapes a literal `,` or `|` inside the
//! symbol alphabet.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::{CharClass, ClassSet};

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(encode(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let mut reader = BufReader::new(OpenOptions::new().read(true).open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(line.trim_end_matches(['\r', '\n']), settings) {
        log::warn!("settings file {} unreadable, rewriting", path.display());
        *settings = Settings::default();
        save(settings, path)?;
    }
    Ok(())
}

/// `$CLASSPASS_CONFIG`, else `~/.config/classpass/settings`.
pub fn config_path() -> PathBuf {
    if let Ok(path) = env::var("CLASSPASS_CONFIG")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/classpass/settings")
}

fn encode(settings: &Settings) -> String {
    let symbols: String = settings
        .symbols
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect();

    format!(
        "{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.classes.codes(),
        settings.avoid_similar,
        symbols,
        settings.auto_copy,
        settings.rng,
    )
}

/// Fill `settings` from one line. Unparseable fields keep their current
/// value; a wrong field count rejects the whole line.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    if let Some(classes) = parse_classes(&parts[1]) {
        settings.classes = classes;
    }
    settings.avoid_similar = parts[2].parse().unwrap_or(settings.avoid_similar);
    settings.symbols = parts[3].clone();
    settings.auto_copy = parts[4].parse().unwrap_or(settings.auto_copy);
    settings.rng = parts[5].parse().unwrap_or(settings.rng);
    true
}

fn parse_classes(codes: &str) -> Option<ClassSet> {
    codes.chars().map(CharClass::from_code).collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}
