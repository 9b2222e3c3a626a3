// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a copy run.
///
/// Validation failures come first in the order they are checked; the I/O
/// variants carry the path that was being touched when the filesystem gave up.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Percentage must be an integer between 1 and 100 (got '{0}')")]
    InvalidPercentage(String),

    #[error("Source directory '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("No files with extension '{selector}' found in '{}'", .source_dir.display())]
    NoMatchingFiles {
        selector: String,
        source_dir: PathBuf,
    },

    #[error("Invalid file extension '{selector}'")]
    InvalidSelector {
        selector: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to create target directory '{}'", .path.display())]
    CreateTarget {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read source directory '{}'", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy '{}' to '{}'", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    /// True when the invocation itself was rejected rather than a filesystem
    /// operation failing.
    #[inline]
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPercentage(_)
                | Self::InvalidSelector { .. }
                | Self::SourceNotFound(_)
                | Self::NoMatchingFiles { .. }
        )
    }
}
