use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, head_commit_id, merge_line,
    run_gitlet_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn merge_fast_forward(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    checkout_branch(dir.path(), "feature");
    let feature_tip = commit_file(dir.path(), "new.txt", "new", "feature work");
    checkout_branch(dir.path(), "master");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(head_commit_id(dir.path()), feature_tip);
    assert!(merge_line(dir.path()).is_none());
    dir.child("new.txt").assert("new");
}

#[rstest]
fn merge_ancestor_is_a_no_op(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let master_tip = commit_file(dir.path(), "new.txt", "new", "master work");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(head_commit_id(dir.path()), master_tip);
}
