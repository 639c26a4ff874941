//! Error types for vizcheck

use thiserror::Error;

/// Result type alias for vizcheck operations
pub type VizResult<T> = Result<T, VizError>;

/// Main error type for vizcheck
///
/// Per-file problems are not errors. They are recorded as report outcomes
/// and aggregated by the run driver, so only conditions that abort a run
/// before it completes live here.
#[derive(Error, Debug, Clone)]
pub enum VizError {
    /// The base directory itself is missing, so no per-file check can run
    #[error("base directory not found: {0}")]
    MissingBaseDir(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),
}

impl VizError {
    /// Create a new missing-base-directory error
    pub fn missing_base_dir(path: impl Into<String>) -> Self {
        Self::MissingBaseDir(path.into())
    }
}

impl From<std::io::Error> for VizError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
