use crate::common::command::{commit_file, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_commits_by_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let first = commit_file(dir.path(), "a.txt", "1", "same message");
    let second = commit_file(dir.path(), "a.txt", "2", "same message");
    commit_file(dir.path(), "a.txt", "3", "other message");

    let mut expected = vec![first, second];
    expected.sort();

    run_gitlet_command(dir.path(), &["find", "same message"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", expected[0], expected[1]));
}

#[rstest]
fn find_without_match_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["find", "nope"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}

#[rstest]
fn find_matches_message_exactly_as_committed(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let padded = commit_file(dir.path(), "a.txt", "1", "  padded  ");

    run_gitlet_command(dir.path(), &["find", "  padded  "])
        .assert()
        .success()
        .stdout(format!("{padded}\n"));

    run_gitlet_command(dir.path(), &["find", "padded"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}
