use crate::sources::read_word_set;
use anyhow::Result;
use std::{collections::HashSet, path::PathBuf};

/// Merges every names file into one lowercase set.
pub fn load_names(paths: &[PathBuf]) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    for path in paths {
        let file_names = read_word_set(path)?;
        log::info!("Loaded {} names from {}", file_names.len(), path.display());
        names.extend(file_names);
    }
    Ok(names)
}
