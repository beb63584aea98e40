use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, head_commit_id, run_gitlet_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    commit_file(dir.path(), "master-only.txt", "m", "master work");
    commit_file(dir.path(), "base.txt", "master edit\n", "edit base");
    checkout_branch(dir.path(), "feature");
    let feature_tip = commit_file(dir.path(), "feature-only.txt", "f", "feature work");

    dir.child("master-only.txt")
        .assert(predicate::path::missing());
    dir.child("base.txt").assert("base\n");

    checkout_branch(dir.path(), "master");
    dir.child("feature-only.txt")
        .assert(predicate::path::missing());
    dir.child("master-only.txt").assert("m");
    dir.child("base.txt").assert("master edit\n");
    dir.child(".gitlet/HEAD").assert("ref: refs/heads/master\n");

    checkout_branch(dir.path(), "feature");
    assert_eq!(head_commit_id(dir.path()), feature_tip);
}

#[rstest]
#[case("master", "No need to checkout the current branch.\n")]
#[case("missing", "No such branch exists.\n")]
fn checkout_branch_failures(
    branched_repository_dir: TempDir,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let dir = branched_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", name])
        .assert()
        .success()
        .stdout(expected.to_string());
}
