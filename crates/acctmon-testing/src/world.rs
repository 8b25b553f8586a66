//! Isolated environment for CLI integration tests.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with its own config file, so runs never touch the
/// user's real configuration.
///
/// # Example
/// ```no_run
/// use acctmon_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("google", "sandbox.example.net");
/// let mut cmd = world.command().unwrap();
/// cmd.arg("status").assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write a config file selecting the given provider and domain.
    pub fn with_config(self, provider: &str, domain: &str) -> Self {
        let content = format!("provider = \"{}\"\ndomain = \"{}\"\n", provider, domain);
        std::fs::write(&self.config_path, content).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A CLI command pointed at this world's config.
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("acctmon")?;
        cmd.arg("--config").arg(&self.config_path);
        Ok(cmd)
    }
}
