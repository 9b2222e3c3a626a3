// src/core/fs.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use same_file::is_same_file;
use tracing::trace;
use walkdir::WalkDir;

/// The filesystem operations a copy run needs.
///
/// Everything that touches the disk goes through this trait so the copy
/// procedure can be exercised against fakes.
pub trait FileSystem {
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if any component cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Regular files directly inside `dir`, in no particular order.
    ///
    /// Subdirectories, symbolic links and other special entries are left out.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `dir` or one of its entries cannot
    /// be read.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Copies `from` to `to`, replacing `to` if it exists.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the copy fails, or
    /// [`io::ErrorKind::InvalidInput`] if `to` already is `from` (for example
    /// when the target directory is the source directory or links to it).
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64>;
}

/// The real, local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    #[inline]
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            } else {
                trace!(path = %entry.path().display(), "skipping non-regular entry");
            }
        }

        Ok(files)
    }

    #[inline]
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        // Copying a file onto itself truncates it before any byte is read.
        if to.exists() && is_same_file(from, to)? {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' and '{}' are the same file", from.display(), to.display()),
            ));
        }
        fs::copy(from, to)
    }
}
