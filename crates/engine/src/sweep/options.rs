/// Behaviour switches for a [`crate::Sweeper`].
///
/// All options default to off.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SweepOptions {
    empty_cache: bool,
    dry_run: bool,
    match_relative_paths: bool,
}

impl SweepOptions {
    /// Creates options with every switch disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            empty_cache: false,
            dry_run: false,
            match_relative_paths: false,
        }
    }

    /// Deletes the contents of ignored cache folders (`__pycache__`,
    /// `.pytest_cache`, `.cache`) while keeping the folders themselves.
    #[must_use]
    pub const fn empty_cache(mut self, enabled: bool) -> Self {
        self.empty_cache = enabled;
        self
    }

    /// Logs every decision without touching tags or deleting anything.
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Classifies children by their root-relative path (`/web/build`) rather
    /// than by bare name, so rooted rules and `!/path` exceptions apply.
    #[must_use]
    pub const fn match_relative_paths(mut self, enabled: bool) -> Self {
        self.match_relative_paths = enabled;
        self
    }

    /// Reports whether cache folders are emptied.
    #[must_use]
    pub const fn empty_cache_enabled(&self) -> bool {
        self.empty_cache
    }

    /// Reports whether the sweep is a dry run.
    #[must_use]
    pub const fn dry_run_enabled(&self) -> bool {
        self.dry_run
    }

    /// Reports whether children are classified by root-relative path.
    #[must_use]
    pub const fn match_relative_paths_enabled(&self) -> bool {
        self.match_relative_paths
    }
}
