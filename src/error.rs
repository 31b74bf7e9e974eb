use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a run. Everything else surfaces as an
/// `anyhow` IO error with the offending path attached.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Dictionary unavailable: could not fetch {url} and no cache exists ({reason})")]
    FetchFailure { url: String, reason: String },
    #[error("Frequency corpus unavailable at {}: {reason}", .path.display())]
    CorpusUnavailable { path: PathBuf, reason: String },
    #[error("Invalid value '{value}' for {key}")]
    Config { key: String, value: String },
}
