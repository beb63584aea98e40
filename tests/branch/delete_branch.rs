use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn delete_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "topic/one"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["rm-branch", "topic/one"])
        .assert()
        .success()
        .stdout("");

    dir.child(".gitlet/refs/heads/topic")
        .assert(predicate::path::missing());
}

#[rstest]
#[case("master", "Cannot remove the current branch.\n")]
#[case("missing", "A branch with that name does not exist.\n")]
fn delete_branch_failures(
    init_repository_dir: TempDir,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["rm-branch", name])
        .assert()
        .success()
        .stdout(expected.to_string());

    dir.child(".gitlet/refs/heads/master")
        .assert(predicate::path::is_file());
}
