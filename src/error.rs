//! Error types for ftpush
//!
//! Library code returns `FtpushError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::HistoryError;
use crate::domain::ports::{PromptError, ProfileError, ToolError, TransferError, VcsError};
use crate::domain::value_objects::PatternError;

/// Result type alias for ftpush operations
pub type FtpushResult<T> = Result<T, FtpushError>;

/// Main error type for ftpush operations
#[derive(Error, Debug)]
pub enum FtpushError {
    /// Profile could not be read or written
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A git invocation failed
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// The file transfer tool failed
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// npm / composer failed
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Interactive prompt could not be shown
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Invalid exclusion pattern in the profile
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Rollback target could not be resolved
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Neither git-ftp nor ncftpput can serve this profile
    #[error("no transfer tool available: {0}")]
    NoTransferTool(String),

    /// Rollback needs a git working tree
    #[error("{} is not a git repository - rollback needs version control", path.display())]
    NotARepository { path: PathBuf },

    /// Redeploy during rollback failed
    #[error("rollback to #{ordinal} failed: {source}")]
    RollbackFailed {
        ordinal: usize,
        #[source]
        source: Box<FtpushError>,
    },

    /// User declined a confirmation
    #[error("aborted by user")]
    Aborted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
