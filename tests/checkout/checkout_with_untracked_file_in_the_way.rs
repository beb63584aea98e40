use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, head_commit_id, run_gitlet_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

#[rstest]
fn checkout_with_untracked_file_in_the_way(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    checkout_branch(dir.path(), "feature");
    commit_file(dir.path(), "clash.txt", "tracked on feature", "feature work");
    checkout_branch(dir.path(), "master");
    let master_tip = head_commit_id(dir.path());
    dir.child("clash.txt").write_str("precious").unwrap();

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    dir.child("clash.txt").assert("precious");
    dir.child(".gitlet/HEAD").assert("ref: refs/heads/master\n");
    assert_eq!(head_commit_id(dir.path()), master_tip);
}
