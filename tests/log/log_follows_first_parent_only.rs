use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, log_output, merge_line,
    run_gitlet_command,
};
use crate::common::commit_ids;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///       A (base)
///      / \
///     B   C
///      \ /
///       M
///
/// Expected: log from M lists M, B, A and the root commit, skipping C
#[rstest]
fn log_follows_first_parent_only(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let a = commit_ids(&log_output(dir.path())).remove(0);
    let b = commit_file(dir.path(), "left.txt", "left", "B");
    checkout_branch(dir.path(), "feature");
    let c = commit_file(dir.path(), "right.txt", "right", "C");
    checkout_branch(dir.path(), "master");

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    let ids = commit_ids(&log_output(dir.path()));
    assert_eq!(ids.len(), 4);
    assert_eq!(&ids[1..3], &[b.clone(), a]);
    assert!(!ids.contains(&c));
    assert_eq!(
        merge_line(dir.path()),
        Some(format!("Merge: {} {}", &b[..7], &c[..7]))
    );
}
