// src/models/status.rs
use std::fmt;
use std::path::Path;

use crate::models::{CopyReport, Percentage};

/// Progress lines emitted while a copy run advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    CreatingTarget {
        target: &'a Path,
    },
    Copying {
        total: usize,
        selected: usize,
        percentage: Percentage,
        source: &'a Path,
        target: &'a Path,
    },
    Done(CopyReport),
}

impl fmt::Display for Status<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CreatingTarget { target } => write!(
                f,
                "Target directory '{}' does not exist. Creating it...",
                target.display()
            ),
            Self::Copying {
                total,
                selected,
                percentage,
                source,
                target,
            } => write!(
                f,
                "Found {total} matching files. Copying first {selected} files ({percentage}) from '{}' to '{}'...",
                source.display(),
                target.display()
            ),
            Self::Done(report) => write!(
                f,
                "Done! Copied {} out of {} files.",
                report.copied, report.total
            ),
        }
    }
}
