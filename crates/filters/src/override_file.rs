use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::defaults::OVERRIDE_FILE_NAME;

/// Error raised when an existing `.dropboxignore` cannot be read.
#[derive(Debug, Error)]
pub enum OverrideFileError {
    /// Reading the file failed for a reason other than it being absent.
    #[error("failed to read override file '{}': {source}", path.display())]
    Read {
        /// Override file that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl OverrideFileError {
    /// Returns the override file involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } => path,
        }
    }
}

/// Returns the location of the override file for `dir`.
#[must_use]
pub fn override_path(dir: &Path) -> PathBuf {
    dir.join(OVERRIDE_FILE_NAME)
}

/// Reads the override text for `dir`.
///
/// A missing `.dropboxignore` is not an error and yields an empty string, so
/// callers cannot tell it apart from an empty file.
pub fn read_override_text(dir: &Path) -> Result<String, OverrideFileError> {
    let path = override_path(dir);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(OverrideFileError::Read { path, source }),
    }
}
