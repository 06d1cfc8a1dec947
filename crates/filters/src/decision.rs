use std::fmt;

use crate::RuleSet;
use crate::defaults::{CARGO_MANIFEST, CARGO_TARGET, NODE_BUILD_FOLDERS, NODE_MODULES};

/// Directory candidate handed to [`RuleSet::classify`].
///
/// `path` is either a bare child name or a root-relative path starting with
/// `/`. Sibling lists are those of the directory containing the candidate;
/// leaving them unset disables the matching heuristic.
#[derive(Clone, Copy, Debug)]
pub struct DirectoryEntry<'a, S = String> {
    path: &'a str,
    sibling_dirs: Option<&'a [S]>,
    sibling_files: Option<&'a [S]>,
}

impl<'a, S: AsRef<str>> DirectoryEntry<'a, S> {
    /// Creates an entry without sibling information.
    #[must_use]
    pub const fn new(path: &'a str) -> Self {
        Self {
            path,
            sibling_dirs: None,
            sibling_files: None,
        }
    }

    /// Attaches the names of the sibling directories.
    #[must_use]
    pub fn with_sibling_dirs(mut self, dirs: &'a [S]) -> Self {
        self.sibling_dirs = Some(dirs);
        self
    }

    /// Attaches the names of the sibling files.
    #[must_use]
    pub fn with_sibling_files(mut self, files: &'a [S]) -> Self {
        self.sibling_files = Some(files);
        self
    }

    /// Returns the queried path.
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }

    /// Returns the final `/`-separated component of the path.
    #[must_use]
    pub fn base_name(&self) -> &'a str {
        self.path.rsplit_once('/').map_or(self.path, |(_, name)| name)
    }
}

/// Reason a directory was, or was not, ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreDecision {
    /// A `!path` or `!/path` exception marker matched.
    Exception,
    /// The base name is a rule.
    NameRule,
    /// The full path is a rule.
    PathRule,
    /// A `build`/`dist`/`.next` folder sits next to an ignored `node_modules`.
    NodeModulesSibling,
    /// A `target` folder sits next to `Cargo.toml`.
    CargoTarget,
    /// Nothing matched.
    NoMatch,
}

impl IgnoreDecision {
    /// Returns `true` when the directory should be tagged as ignored.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        !matches!(self, Self::Exception | Self::NoMatch)
    }
}

impl fmt::Display for IgnoreDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exception => f.write_str("exception"),
            Self::NameRule => f.write_str("name rule"),
            Self::PathRule => f.write_str("path rule"),
            Self::NodeModulesSibling => f.write_str("node_modules sibling"),
            Self::CargoTarget => f.write_str("cargo target"),
            Self::NoMatch => f.write_str("no match"),
        }
    }
}

impl RuleSet {
    /// Classifies `entry` against these rules.
    ///
    /// Checks run in a fixed order and the first hit wins:
    ///
    /// 1. `!path` or `!/path` is a rule: not ignored.
    /// 2. The base name is a rule: ignored.
    /// 3. The full path is a rule: ignored.
    /// 4. The base name is `build`, `dist` or `.next`, a sibling directory is
    ///    `node_modules`, and `node_modules` is a rule: ignored.
    /// 5. The base name is `target` and a sibling file is `Cargo.toml`:
    ///    ignored.
    /// 6. Otherwise not ignored.
    #[must_use]
    pub fn classify<S: AsRef<str>>(&self, entry: &DirectoryEntry<'_, S>) -> IgnoreDecision {
        let path = entry.path();
        let name = entry.base_name();

        if self.contains(&format!("!{path}")) || self.contains(&format!("!/{path}")) {
            return IgnoreDecision::Exception;
        }
        if self.contains(name) {
            return IgnoreDecision::NameRule;
        }
        if self.contains(path) {
            return IgnoreDecision::PathRule;
        }
        if let Some(dirs) = entry.sibling_dirs.filter(|dirs| !dirs.is_empty())
            && NODE_BUILD_FOLDERS.contains(&name)
            && contains_name(dirs, NODE_MODULES)
            && self.contains(NODE_MODULES)
        {
            return IgnoreDecision::NodeModulesSibling;
        }
        if let Some(files) = entry.sibling_files.filter(|files| !files.is_empty())
            && contains_name(files, CARGO_MANIFEST)
            && name == CARGO_TARGET
        {
            return IgnoreDecision::CargoTarget;
        }

        IgnoreDecision::NoMatch
    }
}

fn contains_name<S: AsRef<str>>(names: &[S], wanted: &str) -> bool {
    names.iter().any(|name| name.as_ref() == wanted)
}

/// Returns `true` when `entry_path` should be ignored under `rules`.
///
/// Shorthand for [`RuleSet::classify`] that takes the sibling lists directly.
///
/// # Examples
///
/// ```
/// use filters::{RuleSet, is_ignored};
///
/// let rules = RuleSet::defaults();
/// assert!(!is_ignored::<&str>("/target", &rules, None, None));
/// assert!(is_ignored("/target", &rules, None, Some(&["Cargo.toml"][..])));
/// ```
#[must_use]
pub fn is_ignored<S: AsRef<str>>(
    entry_path: &str,
    rules: &RuleSet,
    sibling_dirs: Option<&[S]>,
    sibling_files: Option<&[S]>,
) -> bool {
    let mut entry = DirectoryEntry::new(entry_path);
    entry.sibling_dirs = sibling_dirs;
    entry.sibling_files = sibling_files;
    rules.classify(&entry).is_ignored()
}
