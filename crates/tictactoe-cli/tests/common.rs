//! Shared setup for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;
use tictactoe_testing::BackgroundStub;

/// A stub backend plus an isolated config file.
pub struct TestEnv {
    _temp_dir: TempDir,
    config_path: PathBuf,
    pub stub: BackgroundStub,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("tictactoe").join("config.toml");
        let stub = BackgroundStub::start().expect("Failed to start stub server");
        Self {
            _temp_dir: temp_dir,
            config_path,
            stub,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// The binary with a clean environment and no `--api-url`.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tictactoe"));
        cmd.env("TICTACTOE_CONFIG", &self.config_path)
            .env_remove("TICTACTOE_API_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// The binary pointed at the stub.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--api-url").arg(self.stub.url());
        cmd
    }

    pub fn std_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_tictactoe"));
        cmd.env("TICTACTOE_CONFIG", &self.config_path)
            .env_remove("TICTACTOE_API_URL")
            .env_remove("RUST_LOG")
            .arg("--api-url")
            .arg(self.stub.url());
        cmd
    }
}
