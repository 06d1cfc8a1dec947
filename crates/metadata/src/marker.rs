use crate::error::MetadataError;
use std::path::Path;

/// Extended attribute key the Dropbox client reads to exclude an item.
///
/// Linux only lets unprivileged processes write the `user.` namespace, so the
/// key carries that prefix there.
#[cfg(target_os = "linux")]
pub const DEFAULT_ATTRIBUTE: &str = "user.com.dropbox.ignored";

/// Extended attribute key the Dropbox client reads to exclude an item.
#[cfg(not(target_os = "linux"))]
pub const DEFAULT_ATTRIBUTE: &str = "com.dropbox.ignored";

/// Value written to the attribute when tagging.
pub const TAG_VALUE: &[u8] = b"1";

/// Reads and changes the "ignored by the sync client" tag of a directory.
///
/// Implementations perform the raw operation only. Callers check
/// [`IgnoreMarker::is_marked`] first so that an already tagged directory is
/// never rewritten and an untagged one is never stripped.
pub trait IgnoreMarker {
    /// Reports whether `path` currently carries the tag.
    fn is_marked(&self, path: &Path) -> Result<bool, MetadataError>;

    /// Attaches the tag to `path`.
    fn mark(&self, path: &Path) -> Result<(), MetadataError>;

    /// Removes the tag from `path`.
    fn unmark(&self, path: &Path) -> Result<(), MetadataError>;
}

impl<M: IgnoreMarker + ?Sized> IgnoreMarker for &M {
    fn is_marked(&self, path: &Path) -> Result<bool, MetadataError> {
        (**self).is_marked(path)
    }

    fn mark(&self, path: &Path) -> Result<(), MetadataError> {
        (**self).mark(path)
    }

    fn unmark(&self, path: &Path) -> Result<(), MetadataError> {
        (**self).unmark(path)
    }
}
