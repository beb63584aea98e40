use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, log_output, merge_line,
    run_gitlet_command,
};
use crate::common::commit_ids;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

/// Test merging with simple divergent branches
///
/// History:
///       X (base)
///      / \
///     Y   Z
///     |   |
///   master  feature
///
/// Expected: Merge commit with parents Y and Z tracking the union of both sides
#[rstest]
fn merge_simple_divergence(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let y = commit_file(dir.path(), "left.txt", "master change\n", "Y");
    checkout_branch(dir.path(), "feature");
    let z = commit_file(dir.path(), "right.txt", "feature change\n", "Z");
    checkout_branch(dir.path(), "master");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    dir.child("left.txt").assert("master change\n");
    dir.child("right.txt").assert("feature change\n");
    dir.child("base.txt").assert("base\n");

    let log = log_output(dir.path());
    assert!(log.contains("\nMerged feature into master.\n"));
    assert_eq!(commit_ids(&log)[1], y);
    assert_eq!(
        merge_line(dir.path()),
        Some(format!("Merge: {} {}", &y[..7], &z[..7]))
    );

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n",
        ));
}

#[rstest]
fn merge_applies_removal_from_target(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    commit_file(dir.path(), "left.txt", "left", "Y");
    checkout_branch(dir.path(), "feature");
    run_gitlet_command(dir.path(), &["rm", "base.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["commit", "drop base"])
        .assert()
        .success();
    checkout_branch(dir.path(), "master");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    dir.child("base.txt").assert(predicate::path::missing());
    dir.child("left.txt").assert("left");
}
