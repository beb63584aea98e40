use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let nested = dir.path().join("a").join("b");
    let files = write_generated_files(&nested, 3);

    for file in &files {
        let relative = file.path.strip_prefix(dir.path()).unwrap();
        run_gitlet_command(dir.path(), &["add", &relative.to_string_lossy()])
            .assert()
            .success();
    }

    let mut status = run_gitlet_command(dir.path(), &["status"]);
    let mut assert = status.assert().success();
    for file in &files {
        let name = file.path.file_name().unwrap().to_string_lossy().to_string();
        assert = assert.stdout(predicate::str::contains(format!("a/b/{name}\n")));
    }
}
