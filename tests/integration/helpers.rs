//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use tempfile::TempDir;

/// 12:00 UTC, i.e. 14:00 on the Amsterdam reference clock (CEST).
pub const NOON_UTC: &str = "2025-06-01T12:00:00Z";

/// Isolated config location for one test.
pub struct Sandbox {
    _dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("livejump").join("config.toml");
        Self { _dir: dir, config }
    }

    pub fn config_path(&self) -> &Path {
        &self.config
    }

    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config.parent().unwrap()).unwrap();
        std::fs::write(&self.config, content).unwrap();
    }

    /// livejump command reading its config from this sandbox.
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("livejump").unwrap();
        cmd.env("NO_COLOR", "1")
            .env("LIVEJUMP_CONFIG", &self.config)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run livejump and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self
            .cmd()
            .args(args)
            .output()
            .expect("Failed to execute livejump");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}
