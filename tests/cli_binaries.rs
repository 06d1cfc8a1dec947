use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn dropbox_wise_ignore() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dropbox-wise-ignore");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_usage_and_options() {
    dropbox_wise_ignore()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage: dropbox-wise-ignore"))
        .stdout(predicate::str::contains("--empty-cache"));
}

#[test]
fn version_goes_to_stdout() {
    dropbox_wise_ignore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dropbox-wise-ignore "));
}

#[test]
fn unknown_flag_exits_with_one() {
    dropbox_wise_ignore()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("dropbox-wise-ignore: error: "));
}

#[test]
fn root_that_is_a_file_exits_with_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("plain.txt");
    fs::write(&file, b"data").expect("write");

    dropbox_wise_ignore()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn sweep_of_plain_tree_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("docs/guide")).expect("dirs");
    fs::write(temp.path().join("docs/index.md"), b"# docs").expect("write");

    dropbox_wise_ignore()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("visited 3 directories: 0 tagged"));
}

#[test]
fn sweep_defaults_to_current_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("src")).expect("dir");

    dropbox_wise_ignore()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("visited 2 directories"));
}

#[test]
fn dry_run_keeps_conflict_artifacts() {
    let temp = tempfile::tempdir().expect("tempdir");
    let artifact = temp.path().join(".tox (Ignored Item Conflict)");
    fs::create_dir(&artifact).expect("dir");

    dropbox_wise_ignore()
        .args(["--dry-run", "--quiet"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(artifact.is_dir());
}

#[test]
fn conflict_artifacts_are_removed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let artifact = temp.path().join("node_modules (Ignored Item Conflict)");
    fs::create_dir_all(artifact.join("pkg")).expect("dir");

    dropbox_wise_ignore()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 nuked"))
        .stderr(predicate::str::contains("Nuking the folder"));
    assert!(!artifact.exists());
}
