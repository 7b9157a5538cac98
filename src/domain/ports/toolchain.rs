//! Toolchain ports
//!
//! Asset builder, package installer and the connectivity probe. All of
//! them wrap external programs whose exit codes are taken at face value.

use thiserror::Error;

use crate::domain::entities::FtpCredentials;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("failed to run {tool}: {message}")]
    Spawn { tool: String, message: String },

    #[error("{tool} exited with {}: {stderr}", code.map(|c| format!("code {}", c)).unwrap_or_else(|| "a signal".to_string()))]
    Failed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Frontend build and PHP dependency installation
pub trait BuildTools {
    /// `npm run build`
    fn build_assets(&self) -> Result<(), ToolError>;

    /// `composer install --no-dev --optimize-autoloader`
    fn install_packages(&self) -> Result<(), ToolError>;
}

/// Outcome of probing the FTP host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub reachable: bool,
    /// stderr of the probe, or the reason it could not run
    pub detail: Option<String>,
}

impl ProbeOutcome {
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            detail: None,
        }
    }

    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self {
            reachable: false,
            detail: Some(detail.into()),
        }
    }
}

/// Pre-flight check that the FTP host answers with these credentials
pub trait ConnectivityProbe {
    fn probe(&self, ftp: &FtpCredentials) -> ProbeOutcome;
}
