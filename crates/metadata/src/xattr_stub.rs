//! Ignore-tag marker for builds without extended attribute support.
//!
//! Every operation fails with [`io::ErrorKind::Unsupported`]. A sweep stops at
//! the first directory whose tag it needs to read.

use crate::error::MetadataError;
use crate::marker::{DEFAULT_ATTRIBUTE, IgnoreMarker};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;

/// [`IgnoreMarker`] that cannot store tags on this platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XattrMarker {
    attribute: OsString,
}

impl XattrMarker {
    /// Creates a marker for `attribute`.
    #[must_use]
    pub fn new(attribute: impl Into<OsString>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Returns the attribute key this marker would use.
    #[must_use]
    pub fn attribute(&self) -> &OsStr {
        &self.attribute
    }
}

impl Default for XattrMarker {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

fn unsupported(context: &'static str, path: &Path) -> MetadataError {
    MetadataError::new(
        context,
        path,
        io::Error::new(
            io::ErrorKind::Unsupported,
            "extended attributes are not supported on this platform",
        ),
    )
}

impl IgnoreMarker for XattrMarker {
    fn is_marked(&self, path: &Path) -> Result<bool, MetadataError> {
        Err(unsupported("read ignore tag of", path))
    }

    fn mark(&self, path: &Path) -> Result<(), MetadataError> {
        Err(unsupported("set ignore tag on", path))
    }

    fn unmark(&self, path: &Path) -> Result<(), MetadataError> {
        Err(unsupported("remove ignore tag from", path))
    }
}
