use std::fmt;

/// Counters collected while sweeping a tree.
///
/// In a dry run the counters describe what would have happened.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SweepReport {
    pub(crate) dry_run: bool,
    pub(crate) directories_visited: u64,
    pub(crate) tagged: u64,
    pub(crate) already_tagged: u64,
    pub(crate) untagged: u64,
    pub(crate) untag_failures: u64,
    pub(crate) nuked: u64,
    pub(crate) caches_emptied: u64,
    pub(crate) deleted_after_tag_failure: u64,
}

impl SweepReport {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Reports whether the numbers come from a dry run.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Directories listed, the root included.
    #[must_use]
    pub const fn directories_visited(&self) -> u64 {
        self.directories_visited
    }

    /// Directories that received the ignore tag.
    #[must_use]
    pub const fn tagged(&self) -> u64 {
        self.tagged
    }

    /// Ignored directories that already carried the tag.
    #[must_use]
    pub const fn already_tagged(&self) -> u64 {
        self.already_tagged
    }

    /// Directories whose stale tag was removed.
    #[must_use]
    pub const fn untagged(&self) -> u64 {
        self.untagged
    }

    /// Tag removals that failed and were skipped.
    #[must_use]
    pub const fn untag_failures(&self) -> u64 {
        self.untag_failures
    }

    /// Conflict artifacts deleted.
    #[must_use]
    pub const fn nuked(&self) -> u64 {
        self.nuked
    }

    /// Cache folders whose contents were deleted.
    #[must_use]
    pub const fn caches_emptied(&self) -> u64 {
        self.caches_emptied
    }

    /// Directories deleted because the tag could not be written.
    #[must_use]
    pub const fn deleted_after_tag_failure(&self) -> u64 {
        self.deleted_after_tag_failure
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            f.write_str("dry run: ")?;
        }
        write!(
            f,
            "visited {} directories: {} tagged, {} already tagged, {} untagged, {} nuked, {} caches emptied",
            self.directories_visited,
            self.tagged,
            self.already_tagged,
            self.untagged,
            self.nuked,
            self.caches_emptied,
        )?;
        if self.deleted_after_tag_failure > 0 {
            write!(
                f,
                ", {} deleted after tag failure",
                self.deleted_after_tag_failure
            )?;
        }
        if self.untag_failures > 0 {
            write!(f, ", {} untag failures", self.untag_failures)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_core_counters() {
        let report = SweepReport {
            directories_visited: 4,
            tagged: 2,
            already_tagged: 1,
            ..SweepReport::default()
        };
        assert_eq!(
            report.to_string(),
            "visited 4 directories: 2 tagged, 1 already tagged, 0 untagged, 0 nuked, 0 caches emptied"
        );
    }

    #[test]
    fn failures_are_appended_only_when_present() {
        let report = SweepReport {
            directories_visited: 1,
            deleted_after_tag_failure: 3,
            untag_failures: 1,
            ..SweepReport::default()
        };
        let summary = report.to_string();
        assert!(summary.ends_with(", 3 deleted after tag failure, 1 untag failures"));
    }

    #[test]
    fn dry_run_is_announced() {
        let report = SweepReport::new(true);
        assert!(report.dry_run());
        assert!(report.to_string().starts_with("dry run: visited 0 directories"));
    }
}
