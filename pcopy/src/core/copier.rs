// src/core/copier.rs
use std::path::Path;

use tracing::debug;

use crate::core::fs::FileSystem;
use crate::core::version_sort::version_cmp;
use crate::error::CopyError;
use crate::models::{Candidate, CopyReport, CopyRequest, ExtensionSelector, Status};

/// Copies the first `percentage` of matching files from the source directory
/// into the target directory.
///
/// Candidates are the regular files directly inside `request.source` whose
/// names match `request.selector`. They are ordered by [`version_cmp`], and
/// the first `ceil(total * percentage / 100)` of them are copied under their
/// original names, replacing anything already in the target. `on_status`
/// receives each progress line as it happens.
///
/// # Arguments
///
/// * `fs` - Filesystem to read from and write to
/// * `request` - Validated source, target, percentage and selector
/// * `on_status` - Receiver for progress lines
///
/// # Returns
///
/// * `Ok(CopyReport)` - How many candidates were found and how many were copied
///
/// # Errors
///
/// This function may return an error if:
/// * The source directory does not exist ([`CopyError::SourceNotFound`])
/// * The target directory cannot be created ([`CopyError::CreateTarget`])
/// * The source directory cannot be listed ([`CopyError::Scan`])
/// * No file matches the selector ([`CopyError::NoMatchingFiles`])
/// * A file fails to copy ([`CopyError::Copy`]); files copied before it stay
#[inline]
pub fn copy_percentage<F, S>(
    fs: &F,
    request: &CopyRequest,
    mut on_status: S,
) -> Result<CopyReport, CopyError>
where
    F: FileSystem + ?Sized,
    S: FnMut(&Status<'_>),
{
    debug!(
        source = %request.source.display(),
        target = %request.target.display(),
        percentage = request.percentage.get(),
        selector = %request.selector,
        "starting copy run"
    );

    if !fs.is_dir(&request.source) {
        return Err(CopyError::SourceNotFound(request.source.clone()));
    }

    ensure_target(fs, &request.target, &mut on_status)?;

    let candidates = collect_candidates(fs, &request.source, &request.selector)?;
    if candidates.is_empty() {
        return Err(CopyError::NoMatchingFiles {
            selector: request.selector.to_string(),
            source_dir: request.source.clone(),
        });
    }

    let total = candidates.len();
    let selected = request.percentage.selection_count(total);
    debug!(total, selected, "computed selection");

    on_status(&Status::Copying {
        total,
        selected,
        percentage: request.percentage,
        source: &request.source,
        target: &request.target,
    });

    let mut report = CopyReport::new(total);
    for candidate in candidates.iter().take(selected) {
        let destination = candidate.path.file_name().map_or_else(
            || request.target.join(&candidate.name),
            |name| request.target.join(name),
        );

        let bytes = fs
            .copy_file(&candidate.path, &destination)
            .map_err(|source| CopyError::Copy {
                from: candidate.path.clone(),
                to: destination.clone(),
                source,
            })?;
        debug!(file = %candidate.name, bytes, "copied");
        report.record_copy();
    }

    on_status(&Status::Done(report));
    Ok(report)
}

/// Creates `target` (with parents) unless it is already a directory.
///
/// # Errors
///
/// Returns [`CopyError::CreateTarget`] if the directory cannot be created.
#[inline]
pub fn ensure_target<F, S>(fs: &F, target: &Path, on_status: &mut S) -> Result<(), CopyError>
where
    F: FileSystem + ?Sized,
    S: FnMut(&Status<'_>),
{
    if fs.is_dir(target) {
        return Ok(());
    }

    on_status(&Status::CreatingTarget { target });
    fs.create_dir_all(target)
        .map_err(|source| CopyError::CreateTarget {
            path: target.to_path_buf(),
            source,
        })?;
    debug!(target = %target.display(), "created target directory");
    Ok(())
}

/// Lists the files in `source` that `selector` accepts, in version order.
///
/// # Errors
///
/// Returns [`CopyError::Scan`] if the directory cannot be listed.
#[inline]
pub fn collect_candidates<F>(
    fs: &F,
    source: &Path,
    selector: &ExtensionSelector,
) -> Result<Vec<Candidate>, CopyError>
where
    F: FileSystem + ?Sized,
{
    let files = fs.list_files(source).map_err(|err| CopyError::Scan {
        path: source.to_path_buf(),
        source: err,
    })?;

    let mut candidates: Vec<Candidate> = files
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            selector.matches(&name).then_some(Candidate { path, name })
        })
        .collect();

    candidates.sort_by(|a, b| version_cmp(&a.name, &b.name).then_with(|| a.path.cmp(&b.path)));
    Ok(candidates)
}
