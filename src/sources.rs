use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub mod corpus;
pub mod dictionary;
pub mod names;
pub mod stopwords;

/// Reads one word per line, lowercased. Blank lines and `#` comments are skipped.
pub fn read_word_set(path: &Path) -> Result<HashSet<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if let Some(word) = parse_word_line(&line) {
            words.insert(word);
        }
    }

    Ok(words)
}

fn parse_word_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line.to_lowercase())
    }
}
