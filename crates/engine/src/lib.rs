#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` hosts the sweep that walks a Dropbox folder and tags heavy
//! generated directories (`node_modules`, `.tox`, caches, build outputs) so
//! the sync client skips them.
//!
//! # Design
//!
//! - [`Sweeper`] pairs an [`metadata::IgnoreMarker`] with [`SweepOptions`] and
//!   drives a [`walk::TreeWalker`] whose per-directory state is the
//!   [`filters::RuleSet`] in effect for that directory.
//! - [`SweepReport`] counts what the sweep did and renders a one-line summary.
//! - [`SweepError`] wraps every failure that aborts a sweep.
//!
//! # Invariants
//!
//! - The sweep root is never tagged or deleted.
//! - Ignored directories are never descended, so their contents are neither
//!   listed nor modified (apart from cache emptying).
//! - In a dry run nothing on disk changes.
//!
//! # See also
//!
//! - [`filters`] for rule resolution and classification.
//! - [`walk`] for the traversal.

mod error;
mod prune;
pub mod sweep;

pub use crate::error::{SweepError, SweepResult};
pub use crate::sweep::{SweepOptions, SweepReport, Sweeper};
