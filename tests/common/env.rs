//! Test environment for running the pxf-cluster binary in isolation.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Variables the binary reads; always cleared before a run
const INHERITED_VARS: &[&str] = &[
    "GPHOME",
    "PXF_HOME",
    "PXF_BASE",
    "JAVA_HOME",
    "PXF_CONF",
    "PXF_PROTOCOL",
    "PXF_PORT",
    "PXF_CLUSTER_DELETE_ON_SYNC",
    "PXF_CLUSTER_AUTO_CONFIRM",
    "PXF_CLUSTER_COORDINATOR",
    "PXF_CLUSTER_SEGMENTS",
    "RUST_LOG",
];

/// Result of running a pxf-cluster CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment with its own config home
pub struct TestEnv {
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pxf-cluster")),
        }
    }

    /// Write the user config file the binary discovers by default
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write_home_file(".config/pxf-cluster/config.toml", content)
    }

    /// Write a file relative to the isolated home
    pub fn write_home_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.home_dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Run with the given PXF variables and an empty stdin
    pub fn run(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_with_input(args, env_vars, "")
    }

    /// Run with the given PXF variables, feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], env_vars: &[(&str, &str)], input: &str) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute pxf-cluster");
        if let Some(mut stdin) = child.stdin.take() {
            // the binary may exit before reading, e.g. on validation errors
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for pxf-cluster");

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
