use crate::ranking::RankedList;
use anyhow::{Context, Result};
use std::path::Path;

/// Overwrites `path` with a header row and one `word,frequency` row per entry.
/// Not atomic, a failure part way leaves a truncated file.
pub fn write_csv(path: &Path, header: &str, list: &RankedList) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer
        .write_record(header.split(','))
        .with_context(|| format!("Failed to write header to {}", path.display()))?;
    for entry in list {
        writer
            .write_record([entry.word.as_str(), entry.frequency.to_string().as_str()])
            .with_context(|| format!("Failed to write '{}' to {}", entry.word, path.display()))?;
    }
    writer.flush().with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
