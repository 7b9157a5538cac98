//! External process helper
//!
//! Every tool ftpush drives runs through [`ToolCommand`]: output is
//! captured, the command line is logged at debug level with secrets
//! masked, and stderr is kept verbatim for error messages.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

const MASK: &str = "***";

/// Captured result of a finished process
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stderr, or stdout when the tool reported its failure there
    pub fn failure_text(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
    secret: Vec<bool>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            secret: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self.secret.push(false);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    /// Argument shown as `***` in logs
    pub fn secret_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self.secret.push(true);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Printable command line with secrets masked
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        for (arg, secret) in self.args.iter().zip(&self.secret) {
            if *secret {
                parts.push(MASK.to_string());
            } else {
                parts.push(arg.to_string_lossy().into_owned());
            }
        }
        parts.join(" ")
    }

    /// Run to completion, capturing stdout and stderr.
    pub fn output(&self) -> io::Result<CommandOutput> {
        debug!(command = %self.display(), "running");
        let mut command = Command::new(&self.program);
        command.args(&self.args).stdin(Stdio::null());
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        let output = command.output()?;
        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            program = %self.program.display(),
            code = ?result.code,
            stderr = %result.stderr.trim(),
            "finished"
        );
        Ok(result)
    }

    /// Whether the program can be started at all; the exit status does not
    /// matter.
    pub fn can_spawn(&self) -> bool {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command.status().is_ok()
    }

    /// Whether the program starts and exits successfully.
    pub fn succeeds(&self) -> bool {
        self.output().map(|o| o.success).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_masks_secret_arguments() {
        let cmd = ToolCommand::new("ncftpput")
            .args(["-u", "deploy", "-p"])
            .secret_arg("hunter2")
            .arg("ftp.example.com");
        assert_eq!(cmd.display(), "ncftpput -u deploy -p *** ftp.example.com");
        assert!(!cmd.display().contains("hunter2"));
    }

    #[test]
    fn failure_text_falls_back_to_stdout() {
        let out = CommandOutput {
            success: false,
            code: Some(1),
            stdout: "Login incorrect\n".to_string(),
            stderr: "  ".to_string(),
        };
        assert_eq!(out.failure_text(), "Login incorrect");
    }

    #[test]
    fn missing_program_cannot_spawn() {
        let cmd = ToolCommand::new("/nonexistent/ftpush-test-binary");
        assert!(!cmd.can_spawn());
        assert!(!cmd.succeeds());
        assert!(cmd.output().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn captures_exit_status() {
        assert!(ToolCommand::new("true").succeeds());
        let out = ToolCommand::new("false").output().unwrap();
        assert!(!out.success);
        assert_eq!(out.code, Some(1));
    }
}
