use super::*;

const NO_SIBLINGS: Option<&[&str]> = None;

fn ignored(path: &str, rules: &RuleSet) -> bool {
    is_ignored(path, rules, NO_SIBLINGS, NO_SIBLINGS)
}

#[test]
fn root_resolution_yields_defaults() {
    let rules = RuleSet::resolve(None, "");
    assert_eq!(rules, RuleSet::defaults());
    assert!(rules.contains("node_modules"));
    assert!(ignored("/node_modules", &rules));
}

#[test]
fn defaults_contain_exactly_the_default_exclusions() {
    let rules = RuleSet::defaults();
    let tokens: Vec<_> = rules.iter().collect();
    assert_eq!(
        tokens,
        [".cache", ".pytest_cache", ".tox", "__pycache__", "node_modules"]
    );
}

#[test]
fn override_adds_to_defaults() {
    let rules = RuleSet::resolve(None, "something");
    assert!(rules.contains("node_modules"));
    assert!(rules.contains("something"));
    assert!(ignored("/node_modules", &rules));
    assert!(ignored("/something", &rules));
    assert!(ignored("/other/something", &rules));
}

#[test]
fn negation_removes_member_and_stores_missing_one() {
    let rules = RuleSet::resolve(None, "!node_modules\n!missing");
    assert!(!rules.contains("node_modules"));
    assert!(rules.contains("!missing"));
    assert!(!ignored("/node_modules", &rules));
    assert!(!ignored("/other/node_modules", &rules));
}

#[test]
fn resolve_does_not_mutate_parent() {
    let parent = RuleSet::from_iter(["a"]);
    let resolved = RuleSet::resolve(Some(&parent), "!a\nb");

    assert_eq!(parent, RuleSet::from_iter(["a"]));
    assert_eq!(resolved, RuleSet::from_iter(["b"]));
}

#[test]
fn sibling_resolutions_are_independent() {
    let parent = RuleSet::defaults();
    let first = RuleSet::resolve(Some(&parent), "!node_modules");
    let second = RuleSet::resolve(Some(&parent), "vendor");

    assert!(!first.contains("node_modules"));
    assert!(second.contains("node_modules"));
    assert!(!second.contains("!node_modules"));
    assert!(!first.contains("vendor"));
}

#[test]
fn duplicate_tokens_are_stored_once() {
    let rules = RuleSet::resolve(Some(&RuleSet::new()), "vendor\nvendor\nnode_modules");
    assert_eq!(rules.len(), 2);
}

#[test]
fn trailing_newline_stores_empty_token() {
    let rules = RuleSet::resolve(Some(&RuleSet::new()), "a\n");
    assert_eq!(rules, RuleSet::from_iter(["a", ""]));
}

#[test]
fn negation_applies_in_file_order() {
    let rules = RuleSet::resolve(Some(&RuleSet::new()), "!vendor\nvendor");
    assert_eq!(rules, RuleSet::from_iter(["!vendor", "vendor"]));

    let rules = RuleSet::resolve(Some(&RuleSet::new()), "vendor\n!vendor");
    assert!(rules.is_empty());
}

#[test]
fn exclusion_just_at_root() {
    let parent = RuleSet::from_iter(["node_modules"]);
    let rules = RuleSet::resolve(Some(&parent), "!node_modules\n/node_modules");

    assert_eq!(rules, RuleSet::from_iter(["/node_modules"]));
    assert!(ignored("/node_modules", &rules));
    assert!(!ignored("/other/node_modules", &rules));
}

#[test]
fn rooted_negation_is_stored_as_exception() {
    let parent = RuleSet::from_iter(["node_modules"]);
    let rules = RuleSet::resolve(Some(&parent), "!/node_modules");

    assert_eq!(rules, RuleSet::from_iter(["!/node_modules", "node_modules"]));
    assert!(!ignored("/node_modules", &rules));
    assert!(ignored("/other/node_modules", &rules));
}

#[test]
fn exception_beats_sibling_heuristics() {
    let rules = RuleSet::from_iter(["node_modules", "!build"]);
    let dirs = ["node_modules"];
    let entry = DirectoryEntry::new("build").with_sibling_dirs(&dirs);

    assert_eq!(rules.classify(&entry), IgnoreDecision::Exception);
}

#[test]
fn name_rule_wins_over_path_rule() {
    let rules = RuleSet::from_iter(["cache", "/data/cache"]);
    let entry = DirectoryEntry::<&str>::new("/data/cache");
    assert_eq!(rules.classify(&entry), IgnoreDecision::NameRule);
}

#[test]
fn path_rule_matches_full_path() {
    let rules = RuleSet::from_iter(["/data/cache"]);
    assert_eq!(
        rules.classify(&DirectoryEntry::<&str>::new("/data/cache")),
        IgnoreDecision::PathRule
    );
    assert!(!ignored("/other/cache", &rules));
}

#[test]
fn node_build_folders_follow_ignored_node_modules() {
    let rules = RuleSet::resolve(None, "");
    assert!(ignored("/node_modules", &rules));
    for folder in ["build", "dist", ".next"] {
        let path = format!("/{folder}");
        assert!(!ignored(&path, &rules), "{folder} without siblings");
        assert!(
            is_ignored(&path, &rules, Some(&["node_modules"][..]), None),
            "{folder} next to node_modules"
        );
    }
}

#[test]
fn node_build_heuristic_requires_node_modules_rule() {
    let rules = RuleSet::resolve(None, "!node_modules");
    assert!(!is_ignored(
        "build",
        &rules,
        Some(&["node_modules", "src"][..]),
        None
    ));
}

#[test]
fn node_build_heuristic_ignores_other_names() {
    let rules = RuleSet::defaults();
    assert!(!is_ignored("out", &rules, Some(&["node_modules"][..]), None));
}

#[test]
fn rust_target_follows_cargo_manifest() {
    let rules = RuleSet::resolve(None, "");
    assert!(ignored("/node_modules", &rules));
    assert!(!ignored("/target", &rules));
    assert!(is_ignored("/target", &rules, None, Some(&["Cargo.toml"][..])));
    assert!(!is_ignored("/target", &rules, None, Some(&["package.json"][..])));
}

#[test]
fn empty_sibling_lists_disable_heuristics() {
    let rules = RuleSet::defaults();
    let empty: [&str; 0] = [];
    assert!(!is_ignored("target", &rules, Some(&empty[..]), Some(&empty[..])));
}

#[test]
fn classify_accepts_owned_sibling_names() {
    let rules = RuleSet::defaults();
    let dirs = vec![String::from("node_modules"), String::from("dist")];
    let files = vec![String::from("package.json")];
    let entry = DirectoryEntry::new("dist")
        .with_sibling_dirs(&dirs)
        .with_sibling_files(&files);

    assert_eq!(rules.classify(&entry), IgnoreDecision::NodeModulesSibling);
}
