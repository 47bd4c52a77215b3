//! `config` subcommands and URL resolution.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use tictactoe_testing::fixtures;

#[test]
fn test_config_path_honors_env() {
    let env = TestEnv::new();

    env.bare_command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            env.config_path().to_string_lossy().as_ref(),
        ));
}

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();

    env.bare_command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not created yet)"))
        .stdout(predicate::str::contains("api_url:  http://localhost:8000"))
        .stdout(predicate::str::contains("theme:    light"));
}

#[test]
fn test_set_url_persists_and_is_used() {
    let env = TestEnv::new();
    env.stub.set_game(fixtures::new_game("g1"));

    env.bare_command()
        .args(["config", "set-url", &env.stub.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved api_url"));

    let saved = std::fs::read_to_string(env.config_path()).unwrap();
    assert!(saved.contains(&env.stub.url()));

    env.bare_command()
        .args(["show", "g1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game: g1"));
}

#[test]
fn test_set_url_rejects_invalid_url() {
    let env = TestEnv::new();

    env.bare_command()
        .args(["config", "set-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));

    assert!(!env.config_path().exists());
}

#[test]
fn test_flag_overrides_config_file() {
    let env = TestEnv::new();
    let parent = env.config_path().parent().unwrap();
    std::fs::create_dir_all(parent).unwrap();
    std::fs::write(env.config_path(), "api_url = \"http://127.0.0.1:1\"\n").unwrap();

    env.command()
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env.stub.url()));
}
