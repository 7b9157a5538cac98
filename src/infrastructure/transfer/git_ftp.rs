//! git-ftp transfer tool
//!
//! Incremental uploads based on the commit recorded on the server. The
//! program is run as `<bin> ftp <command>`, so the default binary is `git`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::ports::{
    TransferError, TransferMode, TransferOutcome, TransferRequest, TransferTool,
};
use crate::domain::services::{
    GIT_FTP_IGNORE_FILE as IGNORE_FILE, GIT_FTP_INCLUDE_FILE as INCLUDE_FILE,
};
use crate::infrastructure::process::ToolCommand;

const NAME: &str = "git-ftp";

/// First line of the control files ftpush writes; files without it are
/// left alone.
pub const GENERATED_HEADER: &str = "# generated by ftpush - edits are overwritten";

pub struct GitFtpTransfer {
    program: PathBuf,
}

impl GitFtpTransfer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn io_error(message: impl Into<String>) -> TransferError {
        TransferError::Io {
            tool: NAME,
            message: message.into(),
        }
    }
}

impl TransferTool for GitFtpTransfer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        ToolCommand::new(&self.program)
            .args(["ftp", "--version"])
            .succeeds()
    }

    fn is_incremental(&self) -> bool {
        true
    }

    fn supports_secure(&self) -> bool {
        true
    }

    fn transfer(&self, request: &TransferRequest<'_>) -> Result<TransferOutcome, TransferError> {
        let subcommand = match request.mode {
            TransferMode::Init => vec!["init"],
            TransferMode::Push => vec!["push"],
            TransferMode::PushAll => vec!["push", "--all"],
            TransferMode::Mirror => {
                return Err(TransferError::Unsupported {
                    tool: NAME,
                    reason: "mirror uploads are handled by ncftpput".to_string(),
                })
            }
        };

        // A dry run leaves the working tree untouched
        if !request.dry_run {
            write_control_file(&request.root.join(IGNORE_FILE), &ignore_lines(request.excludes))
                .map_err(|e| Self::io_error(format!("cannot write {}: {}", IGNORE_FILE, e)))?;
            write_control_file(
                &request.root.join(INCLUDE_FILE),
                &include_lines(request.artifacts),
            )
            .map_err(|e| Self::io_error(format!("cannot write {}: {}", INCLUDE_FILE, e)))?;
        }

        let ftp = request.ftp;
        let mut command = ToolCommand::new(&self.program)
            .arg("ftp")
            .args(subcommand)
            .arg("--verbose");
        if request.dry_run {
            command = command.arg("--dry-run");
        }
        let command = command
            .args(["--user", ftp.username.as_str()])
            .arg("--passwd")
            .secret_arg(ftp.password.as_str())
            .arg(ftp.url())
            .current_dir(request.root);

        info!(mode = request.mode.as_str(), dry_run = request.dry_run, "running git-ftp");
        let output = command
            .output()
            .map_err(|e| Self::io_error(format!("failed to run {}: {}", self.program.display(), e)))?;
        if !output.success {
            return Err(TransferError::CommandFailed {
                tool: NAME,
                code: output.code,
                stderr: output.failure_text(),
            });
        }

        let files = parse_file_count(&output.stdout).or_else(|| parse_file_count(&output.stderr));
        debug!(?files, "git-ftp finished");
        Ok(TransferOutcome { files })
    }
}

fn ignore_lines(excludes: &[String]) -> Vec<String> {
    excludes
        .iter()
        .map(|p| p.trim_start_matches('/').to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// `!path` lines: upload these untracked paths on every push.
fn include_lines(artifacts: &[String]) -> Vec<String> {
    artifacts
        .iter()
        .filter(|p| !p.contains('*'))
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .map(|p| format!("!{}", p))
        .collect()
}

/// Whether ftpush may (re)write the control file at `path`.
pub fn is_managed(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().next() == Some(GENERATED_HEADER),
        Err(_) => !path.exists(),
    }
}

fn write_control_file(path: &Path, lines: &[String]) -> io::Result<()> {
    if !is_managed(path) {
        debug!(path = %path.display(), "keeping user-maintained control file");
        return Ok(());
    }
    let mut content = String::from(GENERATED_HEADER);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content)
}

/// File count from git-ftp's verbose output, if it printed one.
fn parse_file_count(output: &str) -> Option<usize> {
    for line in output.lines() {
        let lower = line.to_lowercase();
        if lower.contains("no changed files") {
            return Some(0);
        }
        if let Some(idx) = lower.find(" to sync") {
            let count = lower[..idx]
                .split_whitespace()
                .rev()
                .nth(1)
                .and_then(|n| n.parse().ok());
            if count.is_some() {
                return count;
            }
        }
    }
    None
}
