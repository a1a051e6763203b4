//! Binary asset bundle mirroring.
//!
//! The destination is destroyed and recreated, not merged: a stale
//! subtree from a previous build must never leak into the new site.

use std::fs;
use std::io;
use std::path::Path;

/// Result of mirroring the asset bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// Source copied, with the number of files that landed in the
    /// destination.
    Copied(usize),
    /// Source directory does not exist; nothing was copied.
    SourceMissing,
}

/// Mirror `source` into `dest`, replacing any prior contents of `dest`.
///
/// A missing source directory is not an error: the build proceeds without
/// the bundle and the caller surfaces a warning.
///
/// # Errors
///
/// Returns an I/O error if removing the old destination or copying the
/// tree fails.
pub fn mirror(source: &Path, dest: &Path) -> Result<MirrorOutcome, io::Error> {
    if !source.is_dir() {
        tracing::warn!(source = %source.display(), "Asset directory not found, skipping bundle");
        return Ok(MirrorOutcome::SourceMissing);
    }

    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }

    let count = copy_tree(source, dest)?;
    tracing::info!(count, dest = %dest.display(), "Copied asset bundle");
    Ok(MirrorOutcome::Copied(count))
}

/// Recursively copy a directory tree, returning the number of files copied.
fn copy_tree(source: &Path, dest: &Path) -> Result<usize, io::Error> {
    fs::create_dir_all(dest)?;
    let mut count = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            count += copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            tracing::debug!(file = %target.display(), "Copied");
            count += 1;
        }
    }
    Ok(count)
}
