//! Transfer Tool Port
//!
//! Defines the interface for uploading the working tree to the FTP host.
//! Implementations wrap an external program (git-ftp, ncftpput).

use std::path::Path;
use thiserror::Error;

use crate::domain::entities::FtpCredentials;
use crate::domain::value_objects::DeployKind;

/// What the transfer tool is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// First upload with git-ftp: everything, then record the commit remotely
    Init,
    /// Upload files changed since the remotely recorded commit
    Push,
    /// git-ftp push ignoring the remote commit (`--all`)
    PushAll,
    /// Recursive upload of the staged tree
    Mirror,
}

impl TransferMode {
    pub fn kind(&self) -> DeployKind {
        match self {
            TransferMode::Push => DeployKind::Incremental,
            TransferMode::Init | TransferMode::PushAll | TransferMode::Mirror => DeployKind::Full,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMode::Init => "init",
            TransferMode::Push => "push",
            TransferMode::PushAll => "push --all",
            TransferMode::Mirror => "mirror",
        }
    }
}

/// Everything a transfer tool needs for one upload.
#[derive(Debug, Clone)]
pub struct TransferRequest<'a> {
    /// Project root (the local tree to publish)
    pub root: &'a Path,
    pub ftp: &'a FtpCredentials,
    pub mode: TransferMode,
    /// Gitignore-style patterns never uploaded
    pub excludes: &'a [String],
    /// Build outputs uploaded even though git does not track them
    pub artifacts: &'a [String],
    pub dry_run: bool,
}

/// Result of a transfer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferOutcome {
    /// Number of files uploaded (or that would be), when the tool reports it
    pub files: Option<usize>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The tool cannot serve this request
    #[error("{tool} cannot be used: {reason}")]
    Unsupported { tool: &'static str, reason: String },

    /// Staging or spawning failed locally
    #[error("{tool}: {message}")]
    Io { tool: &'static str, message: String },

    /// The tool ran and exited non-zero
    #[error("{tool} failed (exit code {}): {stderr}", code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()))]
    CommandFailed {
        tool: &'static str,
        code: Option<i32>,
        stderr: String,
    },
}

/// Strategy for publishing files to the FTP host
pub trait TransferTool {
    /// Name of the transfer program (for logs and history output)
    fn name(&self) -> &'static str;

    /// Check if this tool is installed
    fn is_available(&self) -> bool;

    /// Whether the tool uploads deltas based on git history
    fn is_incremental(&self) -> bool;

    /// Whether the tool can speak explicit FTPS
    fn supports_secure(&self) -> bool;

    /// Upload according to `request`
    fn transfer(&self, request: &TransferRequest<'_>) -> Result<TransferOutcome, TransferError>;
}
