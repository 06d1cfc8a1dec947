//! Error type returned by the sweep driver.

use std::io;
use std::path::{Path, PathBuf};

use filters::OverrideFileError;
use metadata::MetadataError;
use thiserror::Error;
use walk::WalkError;

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Failure that aborts a sweep.
///
/// Tag failures are not represented here: they are handled by deleting the
/// directory, and only a failure of that deletion surfaces as
/// [`SweepError::Remove`].
#[derive(Debug, Error)]
pub enum SweepError {
    /// The tree could not be walked.
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// A `.dropboxignore` file exists but could not be read.
    #[error(transparent)]
    Override(#[from] OverrideFileError),
    /// The ignore tag of a directory could not be inspected.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    /// A directory or file could not be removed.
    #[error("failed to remove '{}': {source}", path.display())]
    Remove {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// The contents of a cache folder could not be listed.
    #[error("failed to list cache folder '{}': {source}", path.display())]
    ListCache {
        /// Cache folder being emptied.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl SweepError {
    pub(crate) fn remove(path: &Path, source: io::Error) -> Self {
        Self::Remove {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn list_cache(path: &Path, source: io::Error) -> Self {
        Self::ListCache {
            path: path.to_path_buf(),
            source,
        }
    }
}
