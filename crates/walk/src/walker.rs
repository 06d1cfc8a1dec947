use crate::error::WalkError;
use crate::listing::{ChildName, DirectoryListing};
use crate::relative::relative_path;
use logging::trace_walk;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-down walker that hands each directory's listing to the caller together
/// with the state its parent chose for it.
///
/// Nothing below a directory is visited unless the caller passes the child to
/// [`TreeWalker::descend`] while holding the parent's listing. Children
/// requested from one listing are visited in the order they were requested,
/// each subtree completing before the next sibling starts.
#[derive(Debug)]
pub struct TreeWalker<S> {
    root: PathBuf,
    stack: Vec<PendingDirectory<S>>,
    queued: Vec<PendingDirectory<S>>,
    finished: bool,
}

#[derive(Debug)]
struct PendingDirectory<S> {
    path: PathBuf,
    depth: usize,
    state: S,
}

impl<S> TreeWalker<S> {
    pub(crate) fn new(root: PathBuf, seed: S) -> Result<Self, WalkError> {
        let metadata = fs::metadata(&root)
            .map_err(|error| WalkError::root_unreadable(root.clone(), error))?;
        if !metadata.is_dir() {
            return Err(WalkError::not_a_directory(root));
        }

        trace_walk!("walking tree rooted at {}", root.display());
        let stack = vec![PendingDirectory {
            path: root.clone(),
            depth: 0,
            state: seed,
        }];

        Ok(Self {
            root,
            stack,
            queued: Vec::new(),
            finished: false,
        })
    }

    /// Lists the next pending directory and hands back its state.
    ///
    /// Returns `None` once every requested directory has been visited. The
    /// first error ends the walk; later calls return `None`.
    pub fn next_directory(&mut self) -> Option<Result<(DirectoryListing, S), WalkError>> {
        if self.finished {
            return None;
        }

        while let Some(pending) = self.queued.pop() {
            self.stack.push(pending);
        }

        let pending = self.stack.pop()?;
        match self.list(&pending.path, pending.depth) {
            Ok(listing) => Some(Ok((listing, pending.state))),
            Err(error) => {
                self.finished = true;
                self.stack.clear();
                Some(Err(error))
            }
        }
    }

    /// Schedules `child` of `listing` for a visit carrying `state`.
    ///
    /// Symbolic links are never followed; the call is a no-op for them and
    /// returns `false`.
    pub fn descend(&mut self, listing: &DirectoryListing, child: &ChildName, state: S) -> bool {
        if child.is_symlink() {
            trace_walk!(
                "not following symlinked directory {}",
                listing.child_relative_path(child)
            );
            return false;
        }

        self.queued.push(PendingDirectory {
            path: listing.child_path(child),
            depth: listing.depth() + 1,
            state,
        });
        true
    }

    fn list(&self, path: &Path, depth: usize) -> Result<DirectoryListing, WalkError> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        let read_dir = fs::read_dir(path)
            .map_err(|error| WalkError::list_directory(path.to_path_buf(), error))?;
        for entry in read_dir {
            let entry =
                entry.map_err(|error| WalkError::list_entry(path.to_path_buf(), error))?;
            let file_type = entry
                .file_type()
                .map_err(|error| WalkError::entry_type(entry.path(), error))?;

            if file_type.is_dir() {
                dirs.push(ChildName::new(entry.file_name(), false));
            } else if file_type.is_symlink() {
                // Dangling links are files.
                let points_at_dir = fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir());
                let child = ChildName::new(entry.file_name(), true);
                if points_at_dir {
                    dirs.push(child);
                } else {
                    files.push(child);
                }
            } else {
                files.push(ChildName::new(entry.file_name(), false));
            }
        }

        dirs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        let relative = relative_path(&self.root, path);
        trace_walk!(
            "listed {}: {} directories, {} files",
            relative,
            dirs.len(),
            files.len()
        );

        Ok(DirectoryListing {
            full_path: path.to_path_buf(),
            relative_path: relative,
            depth,
            dirs,
            files,
        })
    }
}
