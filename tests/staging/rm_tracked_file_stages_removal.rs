use crate::common::command::{commit_file, gitlet_commit, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn rm_tracked_file_stages_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "1", "first");

    run_gitlet_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success()
        .stdout("");

    dir.child("a.txt").assert(predicate::path::missing());
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\na.txt\n\n"));

    gitlet_commit(dir.path(), "remove a").assert().success().stdout("");
    run_gitlet_command(dir.path(), &["checkout", "--", "a.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
}

#[rstest]
fn rm_staged_file_keeps_working_copy(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    dir.child("new.txt").write_str("new").unwrap();
    run_gitlet_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm", "new.txt"])
        .assert()
        .success()
        .stdout("");

    dir.child("new.txt").assert("new");
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Untracked Files ===\nnew.txt\n\n"));
}
