//! Test environment builder for isolated ftpush runs.
//!
//! Every run points the tool overrides at harmless programs: git is a
//! missing path (no repository), curl and ncftpput are `true` unless a test
//! says otherwise.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an ftpush CLI command
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

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    /// Stand-in executables, kept outside the project tree
    pub tools_dir: TempDir,
    ftpush_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp project"),
            tools_dir: tempfile::tempdir().expect("Failed to create tools dir"),
            ftpush_bin: PathBuf::from(env!("CARGO_BIN_EXE_ftpush")),
        }
    }

    /// Whether a real git binary is on PATH
    pub fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Run real git in the project root, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(self.project_root.path())
            .args(args)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// `git init` with a local identity and one commit of the current tree.
    pub fn init_repository(&self) {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.name", "Test Runner"]);
        self.git(&["config", "user.email", "runner@example.com"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", "initial"]);
    }

    /// Write an executable shell script to the tools directory.
    #[cfg(unix)]
    pub fn write_tool_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools_dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.project_path(".ftpush.json")
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_profile(&self, profile: &serde_json::Value) {
        let json = serde_json::to_string_pretty(profile).expect("Failed to encode profile");
        self.write_project_file(".ftpush.json", &json);
    }

    pub fn read_profile_raw(&self) -> String {
        std::fs::read_to_string(self.profile_path()).expect("Failed to read profile")
    }

    pub fn read_profile(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_profile_raw()).expect("Profile is not JSON")
    }

    /// Run ftpush in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run ftpush in the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run ftpush from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.ftpush_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("USER", "tester")
            .env_remove("USERNAME")
            .env_remove("FTPUSH_LOG")
            .env_remove("FTPUSH_FTP_HOST")
            .env_remove("FTPUSH_FTP_USER")
            .env_remove("FTPUSH_FTP_PASSWORD")
            .env_remove("FTPUSH_GIT_FTP")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("FTPUSH_GIT", "/nonexistent/ftpush-test/git")
            .env("FTPUSH_CURL", "true")
            .env("FTPUSH_NCFTPPUT", "true")
            .env("FTPUSH_NPM", "true")
            .env("FTPUSH_COMPOSER", "true");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ftpush");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
