use crate::{error::PipelineError, ranking::FrequencyEntry};
use anyhow::Result;
use std::{fs, path::Path};

/// Loads `(word, frequency)` pairs in file order.
///
/// `.csv` files need a `word,frequency` header. Anything else is read as
/// whitespace separated `word frequency` lines, as frequency dumps are
/// usually shipped. Rows that do not parse, or whose frequency is negative
/// or not finite, are skipped with a warning.
pub fn load_corpus(path: &Path) -> Result<Vec<FrequencyEntry>> {
    let unavailable = |reason: String| PipelineError::CorpusUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let is_csv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let entries = if is_csv {
        parse_csv(path).map_err(|e| unavailable(e.to_string()))?
    } else {
        let contents = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        parse_text(&contents)
    };

    if entries.is_empty() {
        return Err(unavailable("no usable entries".to_string()).into());
    }
    Ok(entries)
}

fn parse_csv(path: &Path) -> csv::Result<Vec<FrequencyEntry>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        match result {
            Ok(record) => {
                let record: FrequencyEntry = record;
                if is_usable(&record) {
                    entries.push(record);
                }
            }
            Err(err) => log::warn!("Skipping corpus row: {err}"),
        }
    }
    Ok(entries)
}

fn parse_text(contents: &str) -> Vec<FrequencyEntry> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .filter_map(|(index, line)| {
            let mut fields = line.split_whitespace();
            let parsed = match (fields.next(), fields.next().map(str::parse::<f64>)) {
                (Some(word), Some(Ok(frequency))) => Some(FrequencyEntry::new(word, frequency)),
                _ => None,
            };
            if parsed.is_none() {
                log::warn!("Skipping corpus line {}: '{line}'", index + 1);
            }
            parsed
        })
        .filter(is_usable)
        .collect()
}

fn is_usable(entry: &FrequencyEntry) -> bool {
    let usable = entry.frequency.is_finite() && entry.frequency >= 0.0;
    if !usable {
        log::warn!("Skipping '{}' with frequency {}", entry.word, entry.frequency);
    }
    usable
}
