//! Status
//!
//! Read-only summary of the profile, the working tree and the external
//! tools. Nothing here touches the network.

use serde::Serialize;

use crate::config::CredentialOverrides;
use crate::domain::entities::{DeploymentProfile, DeploymentRecord};
use crate::domain::ports::VersionControl;
use crate::domain::services::user_changes;
use crate::domain::value_objects::ProjectType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    /// `None` when HEAD is detached
    pub branch: Option<String>,
    pub head: Option<String>,
    pub uncommitted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolAvailability {
    pub name: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub project_type: ProjectType,
    pub project_name: String,
    /// Connection URL; never contains the password
    pub target: String,
    pub username: String,
    pub secure: bool,
    pub build_assets: bool,
    pub run_package_install: bool,
    pub excludes: Vec<String>,
    pub records: usize,
    pub last_deployment: Option<DeploymentRecord>,
    /// `None` outside a git working tree
    pub repository: Option<RepositoryStatus>,
    pub tools: Vec<ToolAvailability>,
    /// Environment variables overriding the profile
    pub overrides: Vec<&'static str>,
}

impl StatusReport {
    pub fn missing_tools(&self) -> impl Iterator<Item = &ToolAvailability> {
        self.tools.iter().filter(|t| !t.available)
    }
}

pub fn collect_status(
    profile: &DeploymentProfile,
    overrides: &CredentialOverrides,
    vcs: &dyn VersionControl,
    tools: Vec<ToolAvailability>,
) -> StatusReport {
    let ftp = overrides.apply(&profile.ftp);
    let repository = vcs.is_repository().then(|| RepositoryStatus {
        branch: vcs.current_branch().ok().flatten(),
        head: vcs
            .head_revision()
            .ok()
            .map(|rev| rev.get(..7).unwrap_or(&rev).to_string()),
        uncommitted: vcs
            .changed_paths()
            .map(|paths| user_changes(paths).len())
            .unwrap_or(0),
    });

    StatusReport {
        project_type: profile.project.project_type,
        project_name: profile.project.name.clone(),
        target: ftp.url(),
        username: ftp.username.clone(),
        secure: ftp.secure,
        build_assets: profile.policy.build_assets,
        run_package_install: profile.policy.run_package_install,
        excludes: profile.policy.normalized_excludes(),
        records: profile.history.len(),
        last_deployment: profile.last_record().cloned(),
        repository,
        tools,
        overrides: overrides.active(),
    }
}
