//! Folder names with fixed meaning across the workspace.
//!
//! These constants are the only global configuration of the rule engine.
//! [`crate::RuleSet::defaults`] builds the root rule set from
//! [`DEFAULT_EXCLUSIONS`] once and hands out copies.

/// Name of the per-directory override file.
pub const OVERRIDE_FILE_NAME: &str = ".dropboxignore";

/// Cache folders whose contents may be emptied once they are ignored.
pub const CACHE_FOLDERS: [&str; 3] = ["__pycache__", ".pytest_cache", ".cache"];

/// Folders excluded everywhere unless an override says otherwise.
pub const DEFAULT_EXCLUSIONS: [&str; 5] = [
    "node_modules",
    ".tox",
    "__pycache__",
    ".pytest_cache",
    ".cache",
];

/// Suffix the Dropbox client appends when an ignored folder collides with a
/// synced one.
pub const CONFLICT_SUFFIX: &str = " (Ignored Item Conflict)";

/// Build output folders that follow an ignored `node_modules` sibling.
pub const NODE_BUILD_FOLDERS: [&str; 3] = ["build", "dist", ".next"];

/// Dependency folder that enables the [`NODE_BUILD_FOLDERS`] heuristic.
pub const NODE_MODULES: &str = "node_modules";

/// Manifest whose presence marks a sibling `target` folder as a Rust build.
pub const CARGO_MANIFEST: &str = "Cargo.toml";

/// Rust build output folder.
pub const CARGO_TARGET: &str = "target";

/// Returns `true` when `name` is one of [`DEFAULT_EXCLUSIONS`].
#[must_use]
pub fn is_default_exclusion(name: &str) -> bool {
    DEFAULT_EXCLUSIONS.contains(&name)
}

/// Returns `true` when `name` is one of [`CACHE_FOLDERS`].
#[must_use]
pub fn is_cache_folder(name: &str) -> bool {
    CACHE_FOLDERS.contains(&name)
}

/// Returns `true` for conflict copies such as `node_modules (Ignored Item Conflict)`.
///
/// Only default exclusions followed by the exact [`CONFLICT_SUFFIX`] qualify.
#[must_use]
pub fn is_conflict_artifact(name: &str) -> bool {
    name.strip_suffix(CONFLICT_SUFFIX)
        .is_some_and(is_default_exclusion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_folders_are_default_exclusions() {
        for folder in CACHE_FOLDERS {
            assert!(is_default_exclusion(folder), "{folder}");
        }
    }

    #[test]
    fn conflict_artifacts_require_exact_suffix() {
        assert!(is_conflict_artifact("node_modules (Ignored Item Conflict)"));
        assert!(is_conflict_artifact(".cache (Ignored Item Conflict)"));
        assert!(!is_conflict_artifact("node_modules"));
        assert!(!is_conflict_artifact("node_modules (Ignored Item Conflict) 2"));
        assert!(!is_conflict_artifact("build (Ignored Item Conflict)"));
    }

    #[test]
    fn cache_folder_membership() {
        assert!(is_cache_folder("__pycache__"));
        assert!(!is_cache_folder("node_modules"));
    }
}
