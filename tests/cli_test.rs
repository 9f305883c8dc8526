//! Tests for the non-interactive paths of the binary

mod common;

use assert_cmd::Command;
use common::TestRepo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config and logging setup
fn gbs(cwd: &std::path::Path, config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gbs").unwrap();
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("GBS_LOG");
    cmd
}

#[test]
fn test_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let config_home = TempDir::new().unwrap();

    gbs(dir.path(), &config_home)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not in a git repository"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_dirty_worktree_is_blocked() {
    let repo = TestRepo::new();
    repo.create_branch("feature-x");
    repo.commit_file("a.txt", "a\n", "Add a");
    repo.commit_file("b.txt", "b\n", "Add b");
    repo.write_file("a.txt", "changed\n");
    repo.write_file("b.txt", "changed\n");
    let config_home = TempDir::new().unwrap();

    gbs(repo.path(), &config_home)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "error: Your local changes to the following files would be overwritten by checkout:",
        ))
        .stdout(predicate::str::contains("        a.txt\n"))
        .stdout(predicate::str::contains("        b.txt\n"))
        .stdout(predicate::str::contains(
            "Please commit your changes or stash them before you switch branches.",
        ))
        .stdout(predicate::str::contains("Branches").not());

    // Nothing was checked out
    assert_ne!(repo.head_branch(), "feature-x");
    assert_eq!(repo.read_file("a.txt"), "changed\n");
}

#[test]
fn test_untracked_file_blocks_by_default() {
    let repo = TestRepo::new();
    repo.write_file("scratch.txt", "wip\n");
    let config_home = TempDir::new().unwrap();

    gbs(repo.path(), &config_home)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("        scratch.txt\n"));
}

#[test]
fn test_dirty_from_subdirectory() {
    let repo = TestRepo::new();
    repo.write_file("src/lib.rs", "// wip\n");
    let config_home = TempDir::new().unwrap();

    gbs(&repo.path().join("src"), &config_home)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("src/lib.rs"));
}

#[test]
fn test_invalid_local_config_fails() {
    let repo = TestRepo::new();
    repo.write_file(".gbs/config.toml", "[ui\n");
    let config_home = TempDir::new().unwrap();

    gbs(repo.path(), &config_home)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TOML parse error"));
}
