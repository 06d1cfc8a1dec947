//! Destructive filesystem helpers used by the sweep.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};

/// Removes `path` and everything below it.
///
/// A symbolic link is removed itself; its target is left alone.
pub(crate) fn remove_tree(path: &Path) -> SweepResult<()> {
    let metadata = fs::symlink_metadata(path).map_err(|error| SweepError::remove(path, error))?;
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|error| SweepError::remove(path, error))
}

/// Lists the immediate entries of `dir`, sorted.
pub(crate) fn directory_contents(dir: &Path) -> SweepResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|error| SweepError::list_cache(dir, error))?;
    let mut contents = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|error| SweepError::list_cache(dir, error))?;
        contents.push(entry.path());
    }
    contents.sort();
    Ok(contents)
}

/// Removes every entry in `contents`, keeping their parent directory.
pub(crate) fn remove_entries(contents: &[PathBuf]) -> SweepResult<()> {
    contents.iter().try_for_each(|path| remove_tree(path))
}
