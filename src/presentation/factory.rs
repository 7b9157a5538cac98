//! Adapter Factory
//!
//! Creates the infrastructure adapters and lends them to the use cases.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{DeployContext, ToolAvailability};
use crate::config::{CredentialOverrides, ToolPaths};
use crate::domain::entities::PROFILE_FILE_NAME;
use crate::domain::ports::PushEventSink;
use crate::infrastructure::{
    tool_availability, CurlProbe, DialoguerPrompter, GitCli, GitFtpTransfer,
    JsonProfileRepository, NcftpTransfer, NpmComposer,
};

/// Owns every adapter needed for one invocation in one project root.
pub struct Toolbox {
    pub root: PathBuf,
    pub profile_path: PathBuf,
    pub paths: ToolPaths,
    pub overrides: CredentialOverrides,
    pub vcs: GitCli,
    pub git_ftp: GitFtpTransfer,
    pub ncftp: NcftpTransfer,
    pub tools: NpmComposer,
    pub probe: CurlProbe,
    pub profiles: JsonProfileRepository,
    pub prompter: DialoguerPrompter,
}

impl Toolbox {
    pub fn new(
        root: &Path,
        paths: ToolPaths,
        overrides: CredentialOverrides,
        colored_prompts: bool,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            profile_path: root.join(PROFILE_FILE_NAME),
            vcs: GitCli::new(&paths.git, root),
            git_ftp: GitFtpTransfer::new(&paths.git_ftp),
            ncftp: NcftpTransfer::new(&paths.ncftpput),
            tools: NpmComposer::new(&paths.npm, &paths.composer, root),
            probe: CurlProbe::new(&paths.curl),
            profiles: JsonProfileRepository::new(),
            prompter: DialoguerPrompter::new(colored_prompts),
            paths,
            overrides,
        }
    }

    /// Tool paths and credential overrides taken from the environment
    pub fn from_env(root: &Path, colored_prompts: bool) -> Self {
        Self::new(
            root,
            ToolPaths::from_env(),
            CredentialOverrides::from_env(),
            colored_prompts,
        )
    }

    /// Borrow the adapters as a push/rollback context.
    ///
    /// git-ftp comes first so repositories get incremental uploads.
    pub fn context<'a>(&'a self, events: &'a dyn PushEventSink) -> DeployContext<'a> {
        DeployContext {
            root: &self.root,
            profile_path: &self.profile_path,
            overrides: &self.overrides,
            vcs: &self.vcs,
            transfers: vec![&self.git_ftp, &self.ncftp],
            tools: &self.tools,
            probe: &self.probe,
            profiles: &self.profiles,
            prompter: &self.prompter,
            events,
        }
    }

    pub fn tool_availability(&self) -> Vec<ToolAvailability> {
        tool_availability(&self.paths)
    }
}
