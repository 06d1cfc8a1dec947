use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error produced when reading or changing the ignore tag fails.
#[derive(Debug, Error)]
#[error("failed to {context} '{}': {source}", path.display())]
pub struct MetadataError {
    context: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl MetadataError {
    /// Creates a new [`MetadataError`] from the supplied context, path, and source error.
    pub fn new(context: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the operation being performed when the error occurred.
    #[must_use]
    pub const fn context(&self) -> &'static str {
        self.context
    }

    /// Returns the path involved in the failing operation.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying [`io::Error`] that triggered this failure.
    #[must_use]
    pub fn source_error(&self) -> &io::Error {
        &self.source
    }

    /// Reports whether the failure means the platform or filesystem cannot
    /// store extended attributes at all.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.source.kind() == io::ErrorKind::Unsupported
    }
}
