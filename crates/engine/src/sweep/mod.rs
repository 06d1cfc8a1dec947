//! Top-down sweep that tags ignored directories.
//!
//! For every directory the walker lists, the sweep resolves the effective
//! rule set from the parent's set and the local `.dropboxignore`, then handles
//! each child directory:
//!
//! - conflict artifacts such as `node_modules (Ignored Item Conflict)` are
//!   deleted;
//! - ignored children are tagged (optionally having their cache contents
//!   removed) and never descended;
//! - other children lose a stale tag when their name is a default exclusion,
//!   then are descended with the current rule set as parent.
//!
//! A tag that cannot be written leads to the directory being deleted so the
//! sync client cannot pick it up. A tag that cannot be removed is logged and
//! skipped.

mod options;
mod report;


use std::path::Path;
use std::rc::Rc;

use filters::defaults::{is_cache_folder, is_conflict_artifact, is_default_exclusion};
use filters::{DirectoryEntry, RuleKind, RuleSet, read_override_text};
use logging::{trace_delete, trace_rules, trace_tag};
use metadata::IgnoreMarker;
use walk::{ChildName, DirectoryListing, WalkBuilder};

use crate::error::SweepResult;
use crate::prune::{directory_contents, remove_entries, remove_tree};

pub use options::SweepOptions;
pub use report::SweepReport;

/// Drives a sweep using `M` to read and write the ignore tag.
#[derive(Clone, Debug)]
pub struct Sweeper<M> {
    marker: M,
    options: SweepOptions,
}

impl<M: IgnoreMarker> Sweeper<M> {
    /// Creates a sweeper with the given marker and options.
    pub const fn new(marker: M, options: SweepOptions) -> Self {
        Self { marker, options }
    }

    /// Returns the marker used for tag I/O.
    pub const fn marker(&self) -> &M {
        &self.marker
    }

    /// Sweeps the tree below `root`.
    ///
    /// The root itself is never tagged or deleted; only its descendants are
    /// classified. Destructive steps already taken stay in place when a later
    /// step fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine::{SweepOptions, Sweeper};
    /// use metadata::{IgnoreMarker, MetadataError};
    /// use std::cell::RefCell;
    /// use std::path::{Path, PathBuf};
    ///
    /// #[derive(Default)]
    /// struct Recorder(RefCell<Vec<PathBuf>>);
    ///
    /// impl IgnoreMarker for Recorder {
    ///     fn is_marked(&self, path: &Path) -> Result<bool, MetadataError> {
    ///         Ok(self.0.borrow().iter().any(|p| p == path))
    ///     }
    ///     fn mark(&self, path: &Path) -> Result<(), MetadataError> {
    ///         self.0.borrow_mut().push(path.to_path_buf());
    ///         Ok(())
    ///     }
    ///     fn unmark(&self, path: &Path) -> Result<(), MetadataError> {
    ///         self.0.borrow_mut().retain(|p| p != path);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::create_dir_all(temp.path().join("web/node_modules/left-pad"))?;
    ///
    /// let sweeper = Sweeper::new(Recorder::default(), SweepOptions::new());
    /// let report = sweeper.run(temp.path())?;
    ///
    /// assert_eq!(report.tagged(), 1);
    /// assert_eq!(report.directories_visited(), 2);
    /// assert!(sweeper.marker().is_marked(&temp.path().join("web/node_modules"))?);
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    pub fn run(&self, root: &Path) -> SweepResult<SweepReport> {
        let mut report = SweepReport::new(self.options.dry_run_enabled());
        let mut walker = WalkBuilder::new(root).build(None::<Rc<RuleSet>>)?;

        while let Some(next) = walker.next_directory() {
            let (listing, parent) = next?;
            report.directories_visited += 1;

            let text = read_override_text(listing.full_path())?;
            let rules = Rc::new(RuleSet::resolve(parent.as_deref(), &text));
            if !text.is_empty() {
                trace_rules!(
                    "rules for {} ({} rooted, {} exceptions): {}",
                    listing.relative_path(),
                    count_kind(&rules, RuleKind::Rooted),
                    count_kind(&rules, RuleKind::Exception),
                    rules
                );
            }

            for child in listing.dirs() {
                if self.visit_child(&listing, child, &rules, &mut report)? {
                    walker.descend(&listing, child, Some(Rc::clone(&rules)));
                }
            }
        }

        Ok(report)
    }

    /// Handles one child directory and reports whether to descend into it.
    fn visit_child(
        &self,
        listing: &DirectoryListing,
        child: &ChildName,
        rules: &RuleSet,
        report: &mut SweepReport,
    ) -> SweepResult<bool> {
        let name = child.as_str();
        let path = listing.child_path(child);

        if is_conflict_artifact(name) {
            trace_delete!("Nuking the folder {}", path.display());
            if !self.options.dry_run_enabled() {
                remove_tree(&path)?;
            }
            report.nuked += 1;
            return Ok(false);
        }

        let relative = listing.child_relative_path(child);
        let query = if self.options.match_relative_paths_enabled() {
            relative.as_str()
        } else {
            name
        };
        let entry = DirectoryEntry::new(query)
            .with_sibling_dirs(listing.dirs())
            .with_sibling_files(listing.files());
        let decision = rules.classify(&entry);
        trace_rules!("{}: {}", relative, decision);

        if decision.is_ignored() {
            let still_present = self.tag(&path, report)?;
            if still_present && self.options.empty_cache_enabled() && is_cache_folder(name) {
                self.empty_cache(&path, report)?;
            }
            return Ok(false);
        }

        if is_default_exclusion(name) {
            self.untag(&path, report)?;
        }
        Ok(true)
    }

    /// Tags `path` unless it already carries the tag.
    ///
    /// Returns `false` when the directory had to be deleted instead.
    fn tag(&self, path: &Path, report: &mut SweepReport) -> SweepResult<bool> {
        if self.marker.is_marked(path)? {
            report.already_tagged += 1;
            return Ok(true);
        }

        trace_tag!("Ignoring {}", path.display());
        if self.options.dry_run_enabled() {
            report.tagged += 1;
            return Ok(true);
        }

        match self.marker.mark(path) {
            Ok(()) => {
                report.tagged += 1;
                Ok(true)
            }
            Err(error) => {
                tracing::warn!(
                    target: "wise_ignore::tag",
                    "Error ignoring folder - nuking it - {error}"
                );
                remove_tree(path)?;
                report.deleted_after_tag_failure += 1;
                Ok(false)
            }
        }
    }

    /// Removes a stale tag from `path`; failures are logged and skipped.
    fn untag(&self, path: &Path, report: &mut SweepReport) -> SweepResult<()> {
        if !self.marker.is_marked(path)? {
            return Ok(());
        }

        trace_tag!("Including ignored folder {}", path.display());
        if self.options.dry_run_enabled() {
            report.untagged += 1;
            return Ok(());
        }

        match self.marker.unmark(path) {
            Ok(()) => report.untagged += 1,
            Err(error) => {
                tracing::warn!(
                    target: "wise_ignore::tag",
                    "Error including ignored folder - {error}"
                );
                report.untag_failures += 1;
            }
        }
        Ok(())
    }

    fn empty_cache(&self, path: &Path, report: &mut SweepReport) -> SweepResult<()> {
        let contents = directory_contents(path)?;
        if contents.is_empty() {
            return Ok(());
        }

        trace_delete!("Emptying cache folder {}", path.display());
        if !self.options.dry_run_enabled() {
            remove_entries(&contents)?;
        }
        report.caches_emptied += 1;
        Ok(())
    }
}

fn count_kind(rules: &RuleSet, kind: RuleKind) -> usize {
    rules.kinds().filter(|&(_, found)| found == kind).count()
}
