//! Mock ports shared by the push and rollback use-case tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use super::context::DeployContext;
use crate::config::CredentialOverrides;
use crate::domain::entities::{
    DeployPolicy, DeploymentProfile, DeploymentRecord, FtpCredentials, ProjectDescriptor,
    PROFILE_FILE_NAME,
};
use crate::domain::ports::{
    BuildTools, ConnectivityProbe, LoadedProfile, ProbeOutcome, ProfileError, ProfileRepository,
    PromptError, Prompter, PushEvent, PushEventSink, ToolError, TransferError, TransferMode,
    TransferOutcome, TransferRequest, TransferTool, VcsError, VersionControl,
};
use crate::domain::value_objects::{DeployKind, ProjectType};

pub struct MockVcs {
    pub repository: bool,
    pub changed: RefCell<Vec<String>>,
    pub head: RefCell<String>,
    /// `None` makes `file_changed_since` fail
    pub lock_changed: Option<bool>,
    pub fail_stash_pop: bool,
    pub fail_checkout_previous: bool,
    /// Revisions whose checkout fails
    pub bad_revisions: Vec<String>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for MockVcs {
    fn default() -> Self {
        Self {
            repository: true,
            changed: RefCell::new(Vec::new()),
            head: RefCell::new("c".repeat(40)),
            lock_changed: Some(false),
            fail_stash_pop: false,
            fail_checkout_previous: false,
            bad_revisions: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockVcs {
    pub fn called(&self, call: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == call)
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn log(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl VersionControl for MockVcs {
    fn is_repository(&self) -> bool {
        self.repository
    }

    fn changed_paths(&self) -> Result<Vec<String>, VcsError> {
        Ok(self.changed.borrow().clone())
    }

    fn head_revision(&self) -> Result<String, VcsError> {
        Ok(self.head.borrow().clone())
    }

    fn current_branch(&self) -> Result<Option<String>, VcsError> {
        Ok(Some("main".to_string()))
    }

    fn user_name(&self) -> Option<String> {
        Some("Dana".to_string())
    }

    fn file_changed_since(&self, revision: &str, path: &str) -> Result<bool, VcsError> {
        self.log(format!("diff {} {}", revision, path));
        self.lock_changed.ok_or_else(|| VcsError::CommandFailed {
            command: "diff".to_string(),
            stderr: "bad revision".to_string(),
        })
    }

    fn stash_push(&self, _message: &str) -> Result<(), VcsError> {
        self.log("stash push");
        self.changed.borrow_mut().clear();
        Ok(())
    }

    fn stash_pop(&self) -> Result<(), VcsError> {
        self.log("stash pop");
        if self.fail_stash_pop {
            return Err(VcsError::CommandFailed {
                command: "stash pop".to_string(),
                stderr: "conflict".to_string(),
            });
        }
        Ok(())
    }

    fn checkout(&self, revision: &str) -> Result<(), VcsError> {
        self.log(format!("checkout {}", revision));
        if self.bad_revisions.iter().any(|r| r == revision) {
            return Err(VcsError::CommandFailed {
                command: format!("checkout {}", revision),
                stderr: "pathspec did not match".to_string(),
            });
        }
        *self.head.borrow_mut() = revision.to_string();
        Ok(())
    }

    fn checkout_previous(&self) -> Result<(), VcsError> {
        self.log("checkout -");
        if self.fail_checkout_previous {
            return Err(VcsError::CommandFailed {
                command: "checkout -".to_string(),
                stderr: "no previous branch".to_string(),
            });
        }
        Ok(())
    }
}

pub struct MockTransfer {
    pub name: &'static str,
    pub incremental: bool,
    pub available: bool,
    pub secure: bool,
    pub fail: bool,
    pub requests: RefCell<Vec<(TransferMode, bool, String)>>,
}

impl MockTransfer {
    pub fn git_ftp() -> Self {
        Self {
            name: "git-ftp",
            incremental: true,
            available: true,
            secure: true,
            fail: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn ncftp() -> Self {
        Self {
            name: "ncftpput",
            incremental: false,
            available: true,
            secure: false,
            fail: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn modes(&self) -> Vec<TransferMode> {
        self.requests.borrow().iter().map(|(m, _, _)| *m).collect()
    }
}

impl TransferTool for MockTransfer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn is_incremental(&self) -> bool {
        self.incremental
    }

    fn supports_secure(&self) -> bool {
        self.secure
    }

    fn transfer(&self, request: &TransferRequest<'_>) -> Result<TransferOutcome, TransferError> {
        self.requests.borrow_mut().push((
            request.mode,
            request.dry_run,
            request.ftp.host.clone(),
        ));
        if self.fail {
            return Err(TransferError::CommandFailed {
                tool: self.name,
                code: Some(5),
                stderr: "530 Login incorrect".to_string(),
            });
        }
        Ok(TransferOutcome { files: Some(3) })
    }
}

#[derive(Default)]
pub struct MockTools {
    pub build_fails: bool,
    pub install_fails: bool,
    pub builds: Cell<usize>,
    pub installs: Cell<usize>,
}

impl BuildTools for MockTools {
    fn build_assets(&self) -> Result<(), ToolError> {
        self.builds.set(self.builds.get() + 1);
        if self.build_fails {
            return Err(ToolError::Failed {
                tool: "npm".to_string(),
                code: Some(1),
                stderr: "vite: command not found".to_string(),
            });
        }
        Ok(())
    }

    fn install_packages(&self) -> Result<(), ToolError> {
        self.installs.set(self.installs.get() + 1);
        if self.install_fails {
            return Err(ToolError::Failed {
                tool: "composer".to_string(),
                code: Some(2),
                stderr: "Your requirements could not be resolved".to_string(),
            });
        }
        Ok(())
    }
}

pub struct MockProbe {
    pub reachable: bool,
}

impl ConnectivityProbe for MockProbe {
    fn probe(&self, _ftp: &FtpCredentials) -> ProbeOutcome {
        if self.reachable {
            ProbeOutcome::reachable()
        } else {
            ProbeOutcome::unreachable("Could not resolve host")
        }
    }
}

#[derive(Default)]
pub struct MemoryProfiles {
    pub saved: RefCell<Option<DeploymentProfile>>,
    pub saves: Cell<usize>,
    pub fail: bool,
}

impl ProfileRepository for MemoryProfiles {
    fn exists(&self, _path: &Path) -> bool {
        self.saved.borrow().is_some()
    }

    fn load(&self, path: &Path) -> Result<LoadedProfile, ProfileError> {
        self.saved
            .borrow()
            .clone()
            .map(|profile| LoadedProfile {
                profile,
                unknown_keys: Vec::new(),
            })
            .ok_or_else(|| ProfileError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn save(&self, profile: &DeploymentProfile, path: &Path) -> Result<(), ProfileError> {
        self.saves.set(self.saves.get() + 1);
        if self.fail {
            return Err(ProfileError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.saved.borrow_mut() = Some(profile.clone());
        Ok(())
    }
}

/// Answers confirmations from a queue (default `true` once empty).
#[derive(Default)]
pub struct ScriptedPrompter {
    pub answers: RefCell<VecDeque<bool>>,
    pub selection: usize,
    pub asked: RefCell<Vec<String>>,
    pub offered: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(true))
    }

    fn select(&self, _prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        *self.offered.borrow_mut() = items.to_vec();
        Ok(self.selection)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<PushEvent>>,
}

impl PushEventSink for RecordingSink {
    fn on_event(&self, event: PushEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// All collaborators of one test run, rooted in a temporary directory.
pub struct Harness {
    pub dir: TempDir,
    pub profile_path: PathBuf,
    pub overrides: CredentialOverrides,
    pub vcs: MockVcs,
    pub git_ftp: MockTransfer,
    pub ncftp: MockTransfer,
    pub tools: MockTools,
    pub probe: MockProbe,
    pub profiles: MemoryProfiles,
    pub prompter: ScriptedPrompter,
    pub events: RecordingSink,
}

impl Harness {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let profile_path = dir.path().join(PROFILE_FILE_NAME);
        Self {
            dir,
            profile_path,
            overrides: CredentialOverrides::default(),
            vcs: MockVcs::default(),
            git_ftp: MockTransfer::git_ftp(),
            ncftp: MockTransfer::ncftp(),
            tools: MockTools::default(),
            probe: MockProbe { reachable: true },
            profiles: MemoryProfiles::default(),
            prompter: ScriptedPrompter::default(),
            events: RecordingSink::default(),
        }
    }

    pub fn ctx(&self) -> DeployContext<'_> {
        DeployContext {
            root: self.dir.path(),
            profile_path: &self.profile_path,
            overrides: &self.overrides,
            vcs: &self.vcs,
            transfers: vec![&self.git_ftp, &self.ncftp],
            tools: &self.tools,
            probe: &self.probe,
            profiles: &self.profiles,
            prompter: &self.prompter,
            events: &self.events,
        }
    }

    pub fn touch(&self, rel: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "{}").unwrap();
    }

    pub fn events(&self) -> Vec<PushEvent> {
        self.events.events.borrow().clone()
    }
}

pub fn laravel_profile() -> DeploymentProfile {
    DeploymentProfile::new(
        ProjectDescriptor {
            project_type: ProjectType::Laravel,
            name: "shop".to_string(),
        },
        FtpCredentials {
            host: "ftp.example.com".to_string(),
            port: 21,
            username: "deploy".to_string(),
            password: "hunter2".to_string(),
            remote_path: "/public_html".to_string(),
            secure: false,
        },
        DeployPolicy {
            build_assets: true,
            run_package_install: true,
            exclude: vec![".env".to_string(), "node_modules/".to_string()],
        },
    )
}

/// Append `n` records whose revisions are `rev1`, `rev2`, ...
pub fn with_history(mut profile: DeploymentProfile, n: usize) -> DeploymentProfile {
    for i in 1..=n {
        let ts = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .unwrap()
            + chrono::Duration::hours(i as i64);
        profile.history.push(DeploymentRecord::new(
            ts,
            "dana",
            DeployKind::Incremental,
            Some(format!("rev{}", i)),
        ));
    }
    profile
}
