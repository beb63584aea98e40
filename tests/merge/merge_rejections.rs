use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, head_commit_id, run_gitlet_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
#[case("master", "Cannot merge a branch with itself.\n")]
#[case("missing", "A branch with that name does not exist.\n")]
fn merge_with_bad_branch(
    branched_repository_dir: TempDir,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let dir = branched_repository_dir;

    run_gitlet_command(dir.path(), &["merge", name])
        .assert()
        .success()
        .stdout(expected.to_string());
}

/// `master` and `feature` each carry one commit on top of the shared base
fn diverge(dir: &TempDir) -> String {
    let master_tip = commit_file(dir.path(), "left.txt", "left", "Y");
    checkout_branch(dir.path(), "feature");
    commit_file(dir.path(), "right.txt", "right", "Z");
    checkout_branch(dir.path(), "master");

    master_tip
}

#[rstest]
fn merge_with_uncommitted_changes(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let master_tip = diverge(&dir);
    dir.child("pending.txt").write_str("p").unwrap();
    run_gitlet_command(dir.path(), &["add", "pending.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");

    assert_eq!(head_commit_id(dir.path()), master_tip);
}

#[rstest]
fn merge_with_untracked_file_in_the_way(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let master_tip = diverge(&dir);
    dir.child("right.txt").write_str("local").unwrap();

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(head_commit_id(dir.path()), master_tip);
    dir.child("right.txt").assert("local");
}

#[rstest]
fn merge_of_identical_changes_commits_nothing(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    checkout_branch(dir.path(), "feature");
    commit_file(dir.path(), "same.txt", "same", "feature adds same");
    checkout_branch(dir.path(), "master");
    let master_tip = commit_file(dir.path(), "same.txt", "same", "master adds same");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    assert_eq!(head_commit_id(dir.path()), master_tip);
    dir.child("same.txt").assert("same");
}
