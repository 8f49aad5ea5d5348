//! Error types for exemption loading and tree scanning.

use std::path::PathBuf;

/// Errors that abort a filename case check.
///
/// Violations are not errors; they are reported through
/// [`ScanReport`](crate::ScanReport).
#[derive(Debug, thiserror::Error)]
pub enum CaseCheckError {
    /// The exemptions file exists but could not be read.
    #[error("failed to read exemptions file {}: {source}", path.display())]
    ReadExemptions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The repository root is missing or not a directory.
    #[error("repository root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    /// Directory traversal failed partway through the walk.
    #[error("failed to walk repository tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, CaseCheckError>;
