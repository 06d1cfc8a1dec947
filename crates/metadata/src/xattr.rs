use crate::error::MetadataError;
use crate::marker::{DEFAULT_ATTRIBUTE, IgnoreMarker, TAG_VALUE};
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// [`IgnoreMarker`] backed by an extended attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XattrMarker {
    attribute: OsString,
}

impl XattrMarker {
    /// Creates a marker that writes `attribute`.
    ///
    /// Symbolic links are followed, so a link is tagged through its target.
    #[must_use]
    pub fn new(attribute: impl Into<OsString>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Returns the attribute key this marker reads and writes.
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

impl IgnoreMarker for XattrMarker {
    fn is_marked(&self, path: &Path) -> Result<bool, MetadataError> {
        xattr::get_deref(path, &self.attribute)
            .map(|value| value.is_some())
            .map_err(|error| MetadataError::new("read ignore tag of", path, error))
    }

    fn mark(&self, path: &Path) -> Result<(), MetadataError> {
        xattr::set_deref(path, &self.attribute, TAG_VALUE)
            .map_err(|error| MetadataError::new("set ignore tag on", path, error))
    }

    fn unmark(&self, path: &Path) -> Result<(), MetadataError> {
        xattr::remove_deref(path, &self.attribute)
            .map_err(|error| MetadataError::new("remove ignore tag from", path, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Helper to check if xattrs are supported on the current filesystem.
    fn xattrs_supported(path: &Path) -> bool {
        let test_name = OsStr::new("user.test_support");
        match xattr::set(path, test_name, b"test") {
            Ok(()) => {
                let _ = xattr::remove(path, test_name);
                true
            }
            Err(_) => false,
        }
    }

    fn test_marker() -> XattrMarker {
        XattrMarker::new("user.com.dropbox.ignored.test")
    }

    #[test]
    fn default_marker_uses_platform_attribute() {
        assert_eq!(XattrMarker::default().attribute(), DEFAULT_ATTRIBUTE);
    }

    #[test]
    fn fresh_directory_is_not_marked() {
        let dir = tempdir().expect("create temp dir");
        if !xattrs_supported(dir.path()) {
            eprintln!("xattrs not supported, skipping test");
            return;
        }

        assert!(!test_marker().is_marked(dir.path()).expect("read tag"));
    }

    #[test]
    fn mark_then_unmark_round_trips() {
        let dir = tempdir().expect("create temp dir");
        let target = dir.path().join("node_modules");
        fs::create_dir(&target).expect("create dir");
        if !xattrs_supported(&target) {
            eprintln!("xattrs not supported, skipping test");
            return;
        }

        let marker = test_marker();
        marker.mark(&target).expect("mark");
        assert!(marker.is_marked(&target).expect("read tag"));
        let value = xattr::get(&target, marker.attribute())
            .expect("get attr")
            .expect("attr present");
        assert_eq!(value, TAG_VALUE);

        marker.unmark(&target).expect("unmark");
        assert!(!marker.is_marked(&target).expect("read tag"));
    }

    #[test]
    fn unmark_without_tag_reports_error() {
        let dir = tempdir().expect("create temp dir");
        if !xattrs_supported(dir.path()) {
            eprintln!("xattrs not supported, skipping test");
            return;
        }

        let error = test_marker()
            .unmark(dir.path())
            .expect_err("removing a missing attribute fails");
        assert_eq!(error.context(), "remove ignore tag from");
        assert_eq!(error.path(), dir.path());
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempdir().expect("create temp dir");
        let missing = dir.path().join("missing");
        let error = test_marker()
            .is_marked(&missing)
            .expect_err("missing path");
        assert_eq!(error.path(), missing);
    }

    #[test]
    fn following_symlinks_tags_the_target() {
        let dir = tempdir().expect("create temp dir");
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).expect("create dir");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");
        if !xattrs_supported(&target) {
            eprintln!("xattrs not supported, skipping test");
            return;
        }

        let marker = test_marker();
        marker.mark(&link).expect("mark through link");
        assert!(marker.is_marked(&target).expect("read tag"));
        marker.unmark(&target).expect("unmark");
    }
}
