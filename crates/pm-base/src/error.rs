use std::path::PathBuf;

use thiserror::Error;

/// Why the skeleton extractor produced nothing.
///
/// The tree builder collapses every variant into the same placeholder; the
/// reason only reaches the debug log.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to launch {program}: {source}")]
    Spawn { program: String, source: std::io::Error },

    #[error("timed out after {0}s")]
    TimedOut(u64),

    #[error("exited with {0}")]
    ExitStatus(std::process::ExitStatus),

    #[error("no skeleton markers in output")]
    MissingMarkers,

    #[error("malformed skeleton payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fatal scan failures.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: std::io::Error },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
