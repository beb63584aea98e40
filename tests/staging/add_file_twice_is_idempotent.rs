use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_file_twice_is_idempotent(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "1", "first");

    run_gitlet_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout("");

    let output = run_gitlet_command(dir.path(), &["status"]).output().unwrap();
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "=== Branches ===\n*master\n\n\
         === Staged Files ===\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n"
    );

    run_gitlet_command(dir.path(), &["commit", "nothing changed"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}
