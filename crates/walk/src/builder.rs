use crate::error::WalkError;
use crate::walker::TreeWalker;
use std::path::PathBuf;

/// Configures a top-down traversal rooted at a specific directory.
///
/// The root must exist and must be a directory (a symlink to a directory is
/// accepted for the root only). Listings are always sorted by name.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Builds a [`TreeWalker`] whose root directory carries `seed` as its state.
    pub fn build<S>(self, seed: S) -> Result<TreeWalker<S>, WalkError> {
        TreeWalker::new(self.root, seed)
    }
}
