//! File copy helpers for the distribution pipeline.
//!
//! Copying is a non-destructive merge: source files overwrite same-named
//! destination files, and destination files with no source counterpart are
//! left alone. Nothing is ever deleted from a student repository.

use std::path::{Path, PathBuf};

use handback_core::CourseConfig;
use tracing::debug;

use crate::error::{io_err, DistributeError};

/// Whether `dir` (recursively) holds at least one non-hidden file.
///
/// "Hidden" means the file's own name starts with a dot. This is purely a
/// naming convention; filesystem hidden attributes are not consulted, and
/// the check applies to the name component only, never the full path.
///
/// A nonexistent or unreadable directory holds zero files; this never errors.
pub fn feedback_files_present(dir: &Path) -> bool {
    let mut found = false;
    walk(dir, &mut |path| {
        if !is_hidden(path) {
            found = true;
        }
    });
    found
}

/// Copy every file under `source` into `dest`, preserving relative paths.
///
/// Files (and directories) whose name is in the config's ignore list are
/// skipped outright. Returns the number of files copied.
pub fn copy_files(
    source: &Path,
    dest: &Path,
    config: &CourseConfig,
) -> Result<usize, DistributeError> {
    copy_tree(source, dest, config)
}

fn copy_tree(source: &Path, dest: &Path, config: &CourseConfig) -> Result<usize, DistributeError> {
    let mut copied = 0;
    let entries = std::fs::read_dir(source).map_err(|e| io_err(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(source, e))?;
        let path = entry.path();
        let name = entry.file_name();
        if config.is_ignored(&name.to_string_lossy()) {
            debug!("ignoring {}", path.display());
            continue;
        }
        let target = dest.join(&name);
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| io_err(&target, e))?;
            copied += copy_tree(&path, &target, config)?;
        } else {
            std::fs::copy(&path, &target).map_err(|e| io_err(&target, e))?;
            debug!("copied {} -> {}", path.display(), target.display());
            copied += 1;
        }
    }
    Ok(copied)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Depth-first visit of every file under `dir`, swallowing I/O errors
/// (an unreadable subtree simply contributes no files).
pub(crate) fn walk(dir: &Path, visit: &mut dyn FnMut(&PathBuf)) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        match entry.file_type() {
            Ok(t) if t.is_dir() => walk(&path, visit),
            Ok(t) if t.is_file() => visit(&path),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
