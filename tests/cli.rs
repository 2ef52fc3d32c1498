//! Argument handling for both binaries

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use treescribe::test_utils::TestTree;

fn mkindex() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mkindex"))
}

fn rename_project() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rename-project"))
}

#[test]
fn mkindex_help_has_no_side_effects() {
    let tree = TestTree::new();
    tree.add_file("docs/a.md", "# A");

    mkindex()
        .current_dir(tree.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("FOLDER"))
        .stdout(predicate::str::contains("current directory"));
    assert!(!tree.exists("index.md"));
}

#[test]
fn mkindex_rejects_extra_arguments() {
    let tree = TestTree::new();
    tree.add_dir("a");
    tree.add_dir("b");

    mkindex()
        .current_dir(tree.path())
        .args(["a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown arguments. Use -h for help."));
    assert!(!tree.exists("index.md"));
    assert!(!tree.exists("a/index.md"));
}

#[test]
fn mkindex_rejects_unknown_flag() {
    let tree = TestTree::new();
    tree.add_file("docs/a.md", "# A");

    mkindex()
        .current_dir(tree.path())
        .arg("--foo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown arguments. Use -h for help."));
    assert!(!tree.exists("index.md"));
}

#[test]
fn mkindex_missing_folder_fails() {
    let tree = TestTree::new();

    mkindex()
        .current_dir(tree.path())
        .arg("missing")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("mkindex: "))
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn mkindex_file_root_fails() {
    let tree = TestTree::new();
    tree.add_file("plain.txt", "text");

    mkindex()
        .current_dir(tree.path())
        .arg("plain.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn mkindex_prints_path_and_rollback_hint() {
    let tree = TestTree::new();
    tree.add_file("docs/a.md", "# A");
    let index = tree.path().canonicalize().unwrap().join("index.md");

    mkindex()
        .current_dir(tree.path())
        .arg("--color=never")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Index written to {}",
            index.display()
        )))
        .stdout(predicate::str::contains(format!(
            "To undo: git reset HEAD^ && git checkout -- {}",
            index.display()
        )));
}

#[test]
fn rename_help_has_no_side_effects() {
    let tree = TestTree::new();
    tree.add_file("old.txt", "old");

    rename_project()
        .current_dir(tree.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore"));
    assert_eq!(tree.read("old.txt"), "old");
}

#[test]
fn rename_single_argument_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("old.txt", "old");
    let before = tree.snapshot();

    rename_project()
        .current_dir(tree.path())
        .arg("new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEW_NAME and OLD_NAME are required"));
    assert_eq!(tree.snapshot(), before);
}

#[test]
fn rename_no_arguments_is_an_error() {
    let tree = TestTree::new();

    rename_project()
        .current_dir(tree.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use -h for help."));
}

#[test]
fn rename_extra_positional_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("old.txt", "old");

    rename_project()
        .current_dir(tree.path())
        .args(["new", "old", "surplus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown arguments. Use -h for help."));
    assert_eq!(tree.read("old.txt"), "old");
}

#[test]
fn rename_unknown_flag_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("old.txt", "old");
    let before = tree.snapshot();

    rename_project()
        .current_dir(tree.path())
        .args(["new", "old", "--force"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown arguments. Use -h for help."));
    assert_eq!(tree.snapshot(), before);
}

#[test]
fn rename_empty_old_name_fails() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    rename_project()
        .current_dir(tree.path())
        .args(["new", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
    assert_eq!(tree.read("a.txt"), "a");
}

#[test]
fn rename_prints_confirmation() {
    let tree = TestTree::new();
    tree.add_file("src/old.txt", "old");

    rename_project()
        .current_dir(tree.path())
        .args(["new", "old", "--color=never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Make sure your work is committed"))
        .stdout(predicate::str::contains("Renamed file: src/old.txt -> src/new.txt"))
        .stdout(predicate::str::contains("Updated content: src/old.txt"))
        .stdout(predicate::str::ends_with("Project name changed from old to new\n"));
}
