use crate::common::command::{head_commit_id, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("feature/nested")]
#[case("hotfix-1.0")]
fn create_branch_with_valid_name(init_repository_dir: TempDir, #[case] name: &str) {
    let dir = init_repository_dir;
    let head = head_commit_id(dir.path());

    run_gitlet_command(dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout("");

    dir.child(format!(".gitlet/refs/heads/{name}"))
        .assert(format!("{head}\n").as_str());
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "=== Branches ===\n{name}\n*master\n\n"
        )));
}

#[rstest]
#[case(".hidden")]
#[case("double..dot")]
#[case("trailing/")]
#[case("name.lock")]
#[case("what?")]
#[case("at@{brace")]
fn create_branch_with_invalid_name(init_repository_dir: TempDir, #[case] name: &str) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(format!("Invalid branch name: {name}.\n"));
}

#[rstest]
fn create_duplicate_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success()
        .stdout("A branch with that name already exists.\n");
}
