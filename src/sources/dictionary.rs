use crate::error::PipelineError;
use anyhow::{Context, Result};
use std::{collections::HashSet, fs, path::Path};

/// Loads the dictionary from its local cache, downloading it first when the
/// cache file does not exist yet.
pub async fn load_dictionary(cache_path: &Path, url: &str) -> Result<HashSet<String>> {
    if !cache_path.exists() {
        log::info!("Fetching dictionary from {url}");
        let contents = fetch_dictionary(url).await.map_err(|e| PipelineError::FetchFailure {
            url: url.to_string(),
            reason: format!("{e:#}"),
        })?;
        fs::write(cache_path, contents.to_lowercase())
            .with_context(|| format!("Failed to cache dictionary at {}", cache_path.display()))?;
        log::info!("Dictionary cached at {}", cache_path.display());
    }

    let contents = fs::read_to_string(cache_path).with_context(|| format!("Failed to read dictionary {}", cache_path.display()))?;
    Ok(parse_dictionary(&contents))
}

async fn fetch_dictionary(url: &str) -> Result<String> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let text = response.text().await.context("Failed to read response body")?;
    Ok(text)
}

fn parse_dictionary(contents: &str) -> HashSet<String> {
    contents.split_whitespace().map(str::to_lowercase).collect()
}
