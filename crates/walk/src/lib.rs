#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the top-down directory traversal behind the ignore sweep.
//! Unlike a flat iterator, the walker hands each directory to the caller
//! before anything below it is read, and only descends into children the
//! caller explicitly requests. Every requested child carries its own state
//! value, which is how per-directory rule sets travel from parent to child.
//!
//! # Design
//!
//! - [`WalkBuilder`] validates the root and produces a [`TreeWalker`].
//! - [`TreeWalker::next_directory`] yields a [`DirectoryListing`] (child
//!   directory and file names, split the way a directory-aware walk would)
//!   together with the state queued for it.
//! - [`TreeWalker::descend`] queues a child with its own state. Children are
//!   visited depth-first in the order they were queued.
//! - [`relative_path`] renders a root-relative path with a leading `/`.
//!
//! # Invariants
//!
//! - A directory the caller did not queue is never listed.
//! - Symbolic links to directories appear in [`DirectoryListing::dirs`] but
//!   are never descended.
//! - Listings are sorted by name.
//! - Traversal never panics; filesystem failures are reported via
//!   [`WalkError`] and end the walk.
//!
//! # Errors
//!
//! [`WalkError`] names the path whose metadata or contents could not be read.
//! The underlying [`std::io::Error`] is reachable through
//! [`std::error::Error::source`].
//!
//! # Examples
//!
//! Walk a tree, skipping every directory called `skip`, and count how many
//! levels deep each visited directory is.
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir_all(temp.path().join("keep/inner"))?;
//! fs::create_dir_all(temp.path().join("skip/inner"))?;
//!
//! let mut walker = WalkBuilder::new(temp.path()).build(0usize)?;
//! let mut seen = Vec::new();
//! while let Some(next) = walker.next_directory() {
//!     let (listing, level) = next?;
//!     seen.push((listing.relative_path().to_owned(), level));
//!     for child in listing.dirs() {
//!         if child.as_str() != "skip" {
//!             walker.descend(&listing, child, level + 1);
//!         }
//!     }
//! }
//!
//! assert_eq!(
//!     seen,
//!     vec![
//!         ("/".to_owned(), 0),
//!         ("/keep".to_owned(), 1),
//!         ("/keep/inner".to_owned(), 2),
//!     ]
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - `engine::sweep` drives this walker with rule sets as state.

mod builder;
mod error;
mod listing;
mod relative;
mod walker;


pub use crate::builder::WalkBuilder;
pub use crate::error::{WalkError, WalkErrorKind};
pub use crate::listing::{ChildName, DirectoryListing};
pub use crate::relative::relative_path;
pub use crate::walker::TreeWalker;
