//! Isolated environment for running the footprint binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a footprint CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Temp working directory and temp config home.
///
/// Variables that would leak the developer's setup (API key, endpoint,
/// factor file, color) are removed from the child environment.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            config_home: tempfile::tempdir().expect("create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_footprint")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write project file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("GEMINI_API_KEY")
            .env_remove("FOOTPRINT_CHAT_ENDPOINT")
            .env_remove("FOOTPRINT_FACTORS")
            .env_remove("FOOTPRINT_COLOR")
            .env_remove("FOOTPRINT_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute footprint");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Factor file with two regions, for `--factors` tests
pub const TWO_REGION_FACTORS: &str = r#"
[regions.India]
Bike = 0.05
Car = 0.14
Bus = 0.03
Electricity = 0.82
Diet = 1.25
Waste = 0.1

[regions.Norway]
Bus = 0.02
Electricity = 0.01
Diet = 1.0
Waste = 0.2
"#;

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
