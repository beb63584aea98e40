use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("missing.txt")]
#[case("../outside.txt")]
fn add_missing_file_fails(init_repository_dir: TempDir, #[case] file_name: &str) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["add", file_name])
        .assert()
        .success()
        .stdout("File does not exist.\n");
}
