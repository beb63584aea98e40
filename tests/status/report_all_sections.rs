use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_empty_sections_for_clean_repository(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    let output = run_gitlet_command(dir.path(), &["status"]).output().unwrap();

    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "=== Branches ===\n*master\n\n\
         === Staged Files ===\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n"
    );
}

#[rstest]
fn report_all_sections(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "removed.txt", "r", "one");
    commit_file(dir.path(), "deleted.txt", "d", "two");
    commit_file(dir.path(), "modified.txt", "m", "three");
    run_gitlet_command(dir.path(), &["branch", "other"])
        .assert()
        .success();

    dir.child("staged.txt").write_str("s").unwrap();
    run_gitlet_command(dir.path(), &["add", "staged.txt"])
        .assert()
        .success();
    dir.child("staged-then-edited.txt").write_str("before").unwrap();
    run_gitlet_command(dir.path(), &["add", "staged-then-edited.txt"])
        .assert()
        .success();
    dir.child("staged-then-edited.txt")
        .write_str("after")
        .unwrap();
    run_gitlet_command(dir.path(), &["rm", "removed.txt"])
        .assert()
        .success();
    std::fs::remove_file(dir.child("deleted.txt").path()).unwrap();
    dir.child("modified.txt").write_str("changed").unwrap();
    dir.child("untracked.txt").write_str("u").unwrap();

    let output = run_gitlet_command(dir.path(), &["status"]).output().unwrap();

    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "=== Branches ===\n*master\nother\n\n\
         === Staged Files ===\nstaged-then-edited.txt\nstaged.txt\n\n\
         === Removed Files ===\nremoved.txt\n\n\
         === Modifications Not Staged For Commit ===\n\
         deleted.txt (deleted)\nmodified.txt (modified)\nstaged-then-edited.txt (modified)\n\n\
         === Untracked Files ===\nuntracked.txt\n\n"
    );
}
