// src/models/copy_plan.rs
use std::path::{Path, PathBuf};

use crate::error::CopyError;
use crate::models::{ExtensionSelector, Percentage};

/// Validated inputs for one copy run.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub source: PathBuf,
    pub target: PathBuf,
    pub percentage: Percentage,
    pub selector: ExtensionSelector,
}

impl CopyRequest {
    /// Validates the raw command-line values.
    ///
    /// Only the percentage and extension are checked here; the directories
    /// are inspected when the run starts.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::InvalidPercentage`] for a percentage outside
    /// `1..=100`, or [`CopyError::InvalidSelector`] if the extension cannot be
    /// turned into a pattern.
    #[inline]
    pub fn parse(
        source: &Path,
        target: &Path,
        percentage: &str,
        extension: &str,
    ) -> Result<Self, CopyError> {
        Ok(Self {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            percentage: percentage.parse()?,
            selector: ExtensionSelector::parse(extension)?,
        })
    }
}

/// A regular file found directly inside the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
}

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    /// Candidates found in the source directory.
    pub total: usize,
    /// Files written to the target directory.
    pub copied: usize,
}

impl CopyReport {
    #[inline]
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self { total, copied: 0 }
    }

    #[inline]
    pub const fn record_copy(&mut self) {
        self.copied = self.copied.saturating_add(1);
    }
}
