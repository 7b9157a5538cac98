//! Push Planner
//!
//! Pure decisions of the push sequence: which transfer tool, which mode,
//! which local changes matter and whether dependencies need installing.
//! Everything here is side-effect free apart from the tools' own
//! availability checks.

use std::path::Path;

use crate::domain::entities::PROFILE_FILE_NAME;
use crate::domain::ports::{TransferMode, TransferTool};
use crate::domain::value_objects::PathPatterns;

pub const GIT_FTP_IGNORE_FILE: &str = ".git-ftp-ignore";
pub const GIT_FTP_INCLUDE_FILE: &str = ".git-ftp-include";

/// Files ftpush writes into the project root itself. They never count as
/// local changes and are never stashed.
pub const MANAGED_FILES: [&str; 3] = [PROFILE_FILE_NAME, GIT_FTP_IGNORE_FILE, GIT_FTP_INCLUDE_FILE];

pub fn is_managed_file(path: &str) -> bool {
    MANAGED_FILES.contains(&path)
}

/// Changed paths minus ftpush's own files.
pub fn user_changes(paths: Vec<String>) -> Vec<String> {
    paths.into_iter().filter(|p| !is_managed_file(p)).collect()
}

/// Pick the transfer tool for this run.
///
/// An incremental tool wins when it is installed and the project is a git
/// repository; otherwise the first installed full-mirror tool is used.
/// Secure profiles only consider tools that speak FTPS.
pub fn select_transfer_tool<'t>(
    tools: &[&'t dyn TransferTool],
    repository: bool,
    secure: bool,
) -> Result<&'t dyn TransferTool, String> {
    let usable =
        |tool: &dyn TransferTool| (!secure || tool.supports_secure()) && tool.is_available();

    if repository {
        if let Some(tool) = tools
            .iter()
            .copied()
            .find(|t| t.is_incremental() && usable(*t))
        {
            return Ok(tool);
        }
    }

    if let Some(tool) = tools
        .iter()
        .copied()
        .find(|t| !t.is_incremental() && usable(*t))
    {
        return Ok(tool);
    }

    let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
    let mut reason = format!("none of {} is usable", names.join(", "));
    if !repository {
        reason.push_str("; incremental uploads need a git repository");
    }
    if secure {
        reason.push_str("; FTPS profiles also need a tool with TLS support (git-ftp)");
    }
    Err(reason)
}

/// Decide the transfer mode for the selected tool.
pub fn plan_transfer_mode(incremental_tool: bool, history_empty: bool, full: bool) -> TransferMode {
    if !incremental_tool {
        TransferMode::Mirror
    } else if history_empty {
        TransferMode::Init
    } else if full {
        TransferMode::PushAll
    } else {
        TransferMode::Push
    }
}

/// Local changes that are neither build artifacts nor ftpush's own files.
///
/// `paths` come from `git status --porcelain`, relative to the project
/// root; untracked directories end with `/`.
pub fn unrelated_changes(paths: &[String], artifacts: &PathPatterns) -> Vec<String> {
    paths
        .iter()
        .filter(|path| !is_managed_file(path))
        .filter(|path| {
            let is_dir = path.ends_with('/');
            let rel = Path::new(path.trim_end_matches('/'));
            !artifacts.is_match(rel, is_dir)
        })
        .cloned()
        .collect()
}

/// Whether `composer install` runs this time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallDecision {
    Run(String),
    Skip(String),
}

/// Decide the dependency-install step.
///
/// `lock_changed` is `None` when there is no previous revision to compare
/// against (first deployment or no repository).
pub fn decide_install(
    enabled: bool,
    lock_file: Option<&str>,
    lock_exists: bool,
    lock_changed: Option<bool>,
) -> InstallDecision {
    let Some(lock_file) = lock_file else {
        return InstallDecision::Skip("project type has no package lock file".to_string());
    };
    if !enabled {
        return InstallDecision::Skip("disabled in profile".to_string());
    }
    if !lock_exists {
        return InstallDecision::Skip(format!("{} not found", lock_file));
    }
    match lock_changed {
        Some(true) => InstallDecision::Run(format!("{} changed since last deployment", lock_file)),
        Some(false) => InstallDecision::Skip(format!("{} unchanged", lock_file)),
        None => InstallDecision::Run("no previous deployment to compare against".to_string()),
    }
}
