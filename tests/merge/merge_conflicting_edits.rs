use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, head_commit_id, merge_line,
    run_gitlet_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn merge_conflicting_edits(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let mine = commit_file(dir.path(), "base.txt", "mine\n", "edit on master");
    checkout_branch(dir.path(), "feature");
    commit_file(dir.path(), "base.txt", "theirs\n", "edit on feature");
    checkout_branch(dir.path(), "master");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    dir.child("base.txt")
        .assert("<<<<<<< HEAD\nmine\n=======\ntheirs\n>>>>>>>\n");
    assert_ne!(head_commit_id(dir.path()), mine);
    assert!(merge_line(dir.path()).is_some());
}

#[rstest]
fn merge_conflict_with_deleted_side(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    run_gitlet_command(dir.path(), &["rm", "base.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "drop base"])
        .assert()
        .success();
    checkout_branch(dir.path(), "feature");
    commit_file(dir.path(), "base.txt", "theirs\n", "edit on feature");
    checkout_branch(dir.path(), "master");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    dir.child("base.txt")
        .assert("<<<<<<< HEAD\n=======\ntheirs\n>>>>>>>\n");
}
