use crate::common::command::{
    branched_repository_dir, checkout_branch, commit_file, run_gitlet_command,
};
use crate::common::commit_ids;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit(branched_repository_dir: TempDir) {
    let dir = branched_repository_dir;
    let on_master = commit_file(dir.path(), "m.txt", "m", "on master");
    checkout_branch(dir.path(), "feature");
    let on_feature = commit_file(dir.path(), "f.txt", "f", "on feature");

    let output = run_gitlet_command(dir.path(), &["global-log"])
        .output()
        .unwrap();
    let ids = commit_ids(&String::from_utf8(output.stdout).unwrap());

    // root, base and one commit per branch
    assert_eq!(ids.len(), 4);
    assert!(ids.contains(&on_master));
    assert!(ids.contains(&on_feature));
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
