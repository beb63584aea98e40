use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, run_gitlet_command,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::rstest;

/// Test merging after a criss-cross history
///
/// History:
///       A (base)
///      / \
///     B   C
///     |\ /|
///     | X |
///     |/ \|
///     M1  M2
///     |   |
///   master  feature
///
/// Both B and C are best common ancestors of M1 and M2. Whichever is chosen as the split
/// point, the file each side changed on its own must come through without a conflict.
#[rstest]
fn merge_criss_cross(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    commit_file(dir.path(), "left.txt", "B\n", "B");
    run_gitlet_command(dir.path(), &["branch", "b-snapshot"])
        .assert()
        .success();
    checkout_branch(dir.path(), "feature");
    commit_file(dir.path(), "right.txt", "C\n", "C");
    run_gitlet_command(dir.path(), &["branch", "c-snapshot"])
        .assert()
        .success();

    // M2 on feature: merge B into C
    run_gitlet_command(dir.path(), &["merge", "b-snapshot"])
        .assert()
        .success()
        .stdout("");
    commit_file(dir.path(), "feature.txt", "feature\n", "feature after M2");

    // M1 on master: merge C into B
    checkout_branch(dir.path(), "master");
    run_gitlet_command(dir.path(), &["merge", "c-snapshot"])
        .assert()
        .success()
        .stdout("");
    commit_file(dir.path(), "master.txt", "master\n", "master after M1");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    dir.child("left.txt").assert("B\n");
    dir.child("right.txt").assert("C\n");
    dir.child("feature.txt").assert("feature\n");
    dir.child("master.txt").assert("master\n");
}
