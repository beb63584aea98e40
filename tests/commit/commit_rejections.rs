use crate::common::command::{gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_without_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let head = head_commit_id(dir.path());

    gitlet_commit(dir.path(), "nothing")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    assert_eq!(head_commit_id(dir.path()), head);
}

#[rstest]
fn commit_with_blank_message_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("1").unwrap();
    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    gitlet_commit(dir.path(), "  ")
        .assert()
        .success()
        .stdout("Please enter a commit message.\n");
}
