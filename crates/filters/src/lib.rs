#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which directories of a tree should be hidden from the
//! Dropbox client. A global set of default exclusions (`node_modules`,
//! `.tox`, Python caches) is merged with the contents of `.dropboxignore`
//! files found while walking the tree, and every child directory is then
//! checked against the merged rules plus two sibling heuristics.
//!
//! Matching is exact string equality. There is no glob syntax.
//!
//! # Design
//!
//! - [`RuleSet`] owns the rule tokens effective for one directory.
//!   [`RuleSet::resolve`] derives a child's set from its parent's set and the
//!   child's override text without touching the parent.
//! - [`RuleSet::classify`] evaluates a [`DirectoryEntry`] and reports the
//!   [`IgnoreDecision`] that produced the answer. [`is_ignored`] is the
//!   boolean shorthand.
//! - [`read_override_text`] loads a directory's `.dropboxignore`, treating a
//!   missing file as empty text.
//! - [`defaults`] holds the fixed folder names the rest of the workspace
//!   keys on (default exclusions, cache folders, conflict artifacts).
//!
//! # Invariants
//!
//! - Resolution never mutates the parent set; every directory owns its own
//!   [`RuleSet`].
//! - A `!token` override removes `token` when it is a member of the working
//!   set and is otherwise stored verbatim as an exception marker.
//! - Exception markers (`!path`, `!/path`) beat every other rule during
//!   classification.
//!
//! # Errors
//!
//! Rule resolution and classification are infallible. [`read_override_text`]
//! reports [`OverrideFileError`] when an existing override file cannot be
//! read.
//!
//! # Examples
//!
//! Un-ignore `node_modules` at the root only while keeping it ignored deeper
//! in the tree:
//!
//! ```
//! use filters::{RuleSet, is_ignored};
//!
//! let parent = RuleSet::from_iter(["node_modules"]);
//! let rules = RuleSet::resolve(Some(&parent), "!/node_modules");
//!
//! assert!(!is_ignored::<&str>("/node_modules", &rules, None, None));
//! assert!(is_ignored::<&str>("/web/node_modules", &rules, None, None));
//! assert_eq!(parent.len(), 1);
//! ```
//!
//! # See also
//!
//! - `engine::sweep` drives [`RuleSet::resolve`] and [`RuleSet::classify`]
//!   across a directory tree.

mod decision;
pub mod defaults;
mod override_file;
mod rule;
mod set;

pub use decision::{DirectoryEntry, IgnoreDecision, is_ignored};
pub use override_file::{OverrideFileError, override_path, read_override_text};
pub use rule::RuleKind;
pub use set::RuleSet;

#[cfg(test)]
mod tests;
