//! VersionControl port
//!
//! The subset of git the deploy and rollback flows rely on. Implementations
//! are bound to one working tree.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VcsError {
    /// The git binary could not be started
    #[error("failed to run git: {0}")]
    Spawn(String),

    /// git ran and exited non-zero; `stderr` is passed through verbatim
    #[error("`git {command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

pub trait VersionControl {
    /// Whether the bound directory is inside a git working tree
    fn is_repository(&self) -> bool;

    /// Paths with uncommitted changes, tracked or untracked
    fn changed_paths(&self) -> Result<Vec<String>, VcsError>;

    /// Full hash of `HEAD`
    fn head_revision(&self) -> Result<String, VcsError>;

    /// Current branch, `None` when detached
    fn current_branch(&self) -> Result<Option<String>, VcsError>;

    /// `user.name` from git config, if set
    fn user_name(&self) -> Option<String>;

    /// Whether `path` differs between `revision` and `HEAD`
    fn file_changed_since(&self, revision: &str, path: &str) -> Result<bool, VcsError>;

    /// Stash all local changes including untracked files
    fn stash_push(&self, message: &str) -> Result<(), VcsError>;

    /// Restore the most recent stash
    fn stash_pop(&self) -> Result<(), VcsError>;

    /// Check out `revision` (detached)
    fn checkout(&self, revision: &str) -> Result<(), VcsError>;

    /// `git checkout -`
    fn checkout_previous(&self) -> Result<(), VcsError>;
}
