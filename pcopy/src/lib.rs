// src/lib.rs
//! Copy a version-sorted percentage of the files in a directory.
//!
//! The top level of a source directory is scanned for regular files with a
//! given extension (or all files, with `*`). Those are sorted the way
//! `sort -V` would sort them, and the first `ceil(total * pct / 100)` are
//! copied into a target directory.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, usage};
pub use crate::core::copier::{collect_candidates, copy_percentage, ensure_target};
pub use crate::core::fs::{FileSystem, LocalFs};
pub use crate::core::version_sort::version_cmp;
pub use crate::error::CopyError;
pub use crate::models::{
    Candidate, CopyReport, CopyRequest, ExtensionSelector, Percentage, Status,
};
