//! ftpush - deployment helper for FTP/FTPS hosting
//!
//! Keeps a per-project deployment profile with a bounded history, pushes
//! the working tree through git-ftp or ncftpput, and redeploys earlier
//! revisions on rollback.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    DeployContext, PushOptions, PushReport, PushUseCase, RollbackOptions, RollbackReport,
    RollbackUseCase,
};
pub use config::{CredentialOverrides, ToolPaths};
pub use domain::entities::{
    DeploymentProfile, DeploymentRecord, History, MAX_HISTORY, PROFILE_FILE_NAME,
};
pub use domain::value_objects::{DeployKind, ProjectType};
pub use error::{FtpushError, FtpushResult};
