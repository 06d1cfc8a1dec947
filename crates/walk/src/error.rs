use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure that ends a walk.
///
/// The walker stops at the first error, so a `WalkError` always names the one
/// directory or entry it could not get past.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn root_unreadable(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::RootUnreadable { path, source },
        }
    }

    pub(crate) fn not_a_directory(path: PathBuf) -> Self {
        Self {
            kind: WalkErrorKind::NotADirectory { path },
        }
    }

    pub(crate) fn list_directory(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ListDirectory { path, source },
        }
    }

    pub(crate) fn list_entry(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ListEntry { path, source },
        }
    }

    pub(crate) fn entry_type(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::EntryType { path, source },
        }
    }

    /// Returns what went wrong.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the path the walker was working on when it failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    ///
    /// let error = match WalkBuilder::new("./no_such_dropbox_folder").build(()) {
    ///     Ok(_) => panic!("a missing root cannot be walked"),
    ///     Err(error) => error,
    /// };
    /// assert!(error.path().ends_with("no_such_dropbox_folder"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path().display();
        match &self.kind {
            WalkErrorKind::RootUnreadable { source, .. } => {
                write!(f, "cannot access sweep root '{path}': {source}")
            }
            WalkErrorKind::NotADirectory { .. } => {
                write!(f, "sweep root '{path}' is not a directory")
            }
            WalkErrorKind::ListDirectory { source, .. } => {
                write!(f, "cannot list '{path}': {source}")
            }
            WalkErrorKind::ListEntry { source, .. } => {
                write!(f, "cannot read an entry of '{path}': {source}")
            }
            WalkErrorKind::EntryType { source, .. } => {
                write!(f, "cannot tell what '{path}' is: {source}")
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::NotADirectory { .. } => None,
            WalkErrorKind::RootUnreadable { source, .. }
            | WalkErrorKind::ListDirectory { source, .. }
            | WalkErrorKind::ListEntry { source, .. }
            | WalkErrorKind::EntryType { source, .. } => Some(source),
        }
    }
}

/// The step of the walk that failed.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// The sweep root could not be stat'ed.
    RootUnreadable {
        /// Root passed to the builder.
        path: PathBuf,
        /// Error from the stat call.
        source: io::Error,
    },
    /// The sweep root is a file or another non-directory.
    NotADirectory {
        /// Root passed to the builder.
        path: PathBuf,
    },
    /// A directory scheduled for a visit could not be opened.
    ListDirectory {
        /// Directory being listed.
        path: PathBuf,
        /// Error from `read_dir`.
        source: io::Error,
    },
    /// Iterating a directory yielded an error instead of an entry.
    ListEntry {
        /// Directory being listed.
        path: PathBuf,
        /// Error yielded by the iterator.
        source: io::Error,
    },
    /// The file type of an entry could not be read.
    EntryType {
        /// The entry itself.
        path: PathBuf,
        /// Error from the file type query.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotADirectory { path }
            | Self::RootUnreadable { path, .. }
            | Self::ListDirectory { path, .. }
            | Self::ListEntry { path, .. }
            | Self::EntryType { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> io::Error {
        io::Error::from(io::ErrorKind::PermissionDenied)
    }

    #[test]
    fn every_kind_reports_its_path() {
        let errors = [
            WalkError::root_unreadable(PathBuf::from("Dropbox"), denied()),
            WalkError::not_a_directory(PathBuf::from("Dropbox")),
            WalkError::list_directory(PathBuf::from("Dropbox"), denied()),
            WalkError::list_entry(PathBuf::from("Dropbox"), denied()),
            WalkError::entry_type(PathBuf::from("Dropbox"), denied()),
        ];
        for error in &errors {
            assert_eq!(error.path(), Path::new("Dropbox"));
            assert_eq!(error.kind().path(), Path::new("Dropbox"));
        }
    }

    #[test]
    fn messages_name_the_path() {
        let listing = WalkError::list_directory(
            PathBuf::from("web/node_modules"),
            io::Error::other("stale handle"),
        );
        assert_eq!(
            listing.to_string(),
            "cannot list 'web/node_modules': stale handle"
        );

        let not_dir = WalkError::not_a_directory(PathBuf::from("notes.txt"));
        assert_eq!(
            not_dir.to_string(),
            "sweep root 'notes.txt' is not a directory"
        );

        let root = WalkError::root_unreadable(PathBuf::from("gone"), io::Error::other("vanished"));
        assert!(root.to_string().starts_with("cannot access sweep root 'gone'"));
    }

    #[test]
    fn io_failures_expose_their_source() {
        let error = WalkError::entry_type(PathBuf::from("app/.next"), denied());
        let source = error
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map(io::Error::kind);
        assert_eq!(source, Some(io::ErrorKind::PermissionDenied));

        assert!(
            WalkError::not_a_directory(PathBuf::from("x"))
                .source()
                .is_none()
        );
    }
}
