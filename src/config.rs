//! Environment configuration
//!
//! `FTPUSH_*` variables that adjust a run without touching the profile:
//! credential overrides (applied in memory, never written back) and the
//! paths of the external programs ftpush drives.

use std::path::PathBuf;

use crate::domain::entities::FtpCredentials;

pub const ENV_FTP_HOST: &str = "FTPUSH_FTP_HOST";
pub const ENV_FTP_USER: &str = "FTPUSH_FTP_USER";
pub const ENV_FTP_PASSWORD: &str = "FTPUSH_FTP_PASSWORD";

/// Credential values taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialOverrides {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            host: get(ENV_FTP_HOST).map(|h| h.trim().to_string()),
            username: get(ENV_FTP_USER),
            password: lookup(ENV_FTP_PASSWORD).filter(|v| !v.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.username.is_none() && self.password.is_none()
    }

    /// Names of the variables that are set, for diagnostics.
    pub fn active(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.host.is_some() {
            names.push(ENV_FTP_HOST);
        }
        if self.username.is_some() {
            names.push(ENV_FTP_USER);
        }
        if self.password.is_some() {
            names.push(ENV_FTP_PASSWORD);
        }
        names
    }

    /// Copy of `ftp` with the overrides applied.
    pub fn apply(&self, ftp: &FtpCredentials) -> FtpCredentials {
        let mut effective = ftp.clone();
        if let Some(host) = &self.host {
            effective.host = host.clone();
        }
        if let Some(username) = &self.username {
            effective.username = username.clone();
        }
        if let Some(password) = &self.password {
            effective.password = password.clone();
        }
        effective
    }
}

/// Executables of the external tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub git: PathBuf,
    /// git-ftp is invoked as `<git_ftp> ftp ...`
    pub git_ftp: PathBuf,
    pub ncftpput: PathBuf,
    pub curl: PathBuf,
    pub npm: PathBuf,
    pub composer: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            git: PathBuf::from("git"),
            git_ftp: PathBuf::from("git"),
            ncftpput: PathBuf::from("ncftpput"),
            curl: PathBuf::from("curl"),
            npm: PathBuf::from("npm"),
            composer: PathBuf::from("composer"),
        }
    }
}

impl ToolPaths {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };
        let git = pick("FTPUSH_GIT", defaults.git);
        Self {
            // git-ftp follows FTPUSH_GIT unless set on its own
            git_ftp: pick("FTPUSH_GIT_FTP", git.clone()),
            git,
            ncftpput: pick("FTPUSH_NCFTPPUT", defaults.ncftpput),
            curl: pick("FTPUSH_CURL", defaults.curl),
            npm: pick("FTPUSH_NPM", defaults.npm),
            composer: pick("FTPUSH_COMPOSER", defaults.composer),
        }
    }
}
