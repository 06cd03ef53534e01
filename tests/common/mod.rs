//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

use tempfile::TempDir;

/// Isolated home directory so a user's own config never leaks into tests
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a config file and return its path
    pub fn with_config(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Binary command with HOME and XDG_CONFIG_HOME pointing into the temp dir
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_unit-converter"));
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Relative closeness for floating point comparisons
pub fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel * a.abs().max(b.abs())
}
