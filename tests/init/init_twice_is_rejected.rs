use crate::common::command::{head_commit_id, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn init_twice_is_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let head = head_commit_id(dir.path());

    run_gitlet_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout("A Gitlet version-control system already exists in the current directory.\n");

    assert_eq!(head_commit_id(dir.path()), head);
}
