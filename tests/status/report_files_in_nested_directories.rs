use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn report_files_in_nested_directories(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a/b/tracked.txt", "t", "nested");
    dir.child("a/b/tracked.txt").write_str("edited").unwrap();
    dir.child("a/c/new.txt").write_str("n").unwrap();

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\na/b/tracked.txt (modified)\n\n",
        ))
        .stdout(predicate::str::contains(
            "=== Untracked Files ===\na/c/new.txt\n\n",
        ));
}

#[rstest]
fn metadata_directory_is_never_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".gitlet").not());
}
