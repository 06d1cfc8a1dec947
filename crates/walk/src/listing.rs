use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Name of an immediate child of a listed directory.
///
/// The raw [`OsString`] is kept for filesystem operations while a lossy UTF-8
/// rendering is used for rule matching and diagnostics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChildName {
    raw: OsString,
    text: String,
    is_symlink: bool,
}

impl ChildName {
    pub(crate) fn new(raw: OsString, is_symlink: bool) -> Self {
        let text = raw.to_string_lossy().into_owned();
        Self {
            raw,
            text,
            is_symlink,
        }
    }

    /// Returns the name exactly as the filesystem reported it.
    #[must_use]
    pub fn as_os_str(&self) -> &OsStr {
        &self.raw
    }

    /// Returns the name as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Reports whether the entry is a symbolic link.
    ///
    /// Symlinked directories are listed with the directories but are never
    /// descended into.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

impl AsRef<str> for ChildName {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// One directory visited by a [`crate::TreeWalker`].
#[derive(Clone, Debug)]
pub struct DirectoryListing {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: String,
    pub(crate) depth: usize,
    pub(crate) dirs: Vec<ChildName>,
    pub(crate) files: Vec<ChildName>,
}

impl DirectoryListing {
    /// Returns the path of the directory as reached from the walk root.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the root-relative path, `/` for the root itself.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Reports the depth of the directory relative to the root (root depth is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Child directories, symlinks to directories included, sorted by name.
    #[must_use]
    pub fn dirs(&self) -> &[ChildName] {
        &self.dirs
    }

    /// Every other child entry, sorted by name.
    #[must_use]
    pub fn files(&self) -> &[ChildName] {
        &self.files
    }

    /// Joins a child name onto this directory's path.
    #[must_use]
    pub fn child_path(&self, child: &ChildName) -> PathBuf {
        self.full_path.join(child.as_os_str())
    }

    /// Root-relative path of a child.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::create_dir(temp.path().join("web"))?;
    ///
    /// let mut walker = WalkBuilder::new(temp.path()).build(())?;
    /// let (root, ()) = walker.next_directory().unwrap()?;
    /// let web = &root.dirs()[0];
    /// assert_eq!(root.child_relative_path(web), "/web");
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn child_relative_path(&self, child: &ChildName) -> String {
        if self.relative_path == "/" {
            format!("/{}", child.as_str())
        } else {
            format!("{}/{}", self.relative_path, child.as_str())
        }
    }
}
