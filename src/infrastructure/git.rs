//! Git CLI adapter
//!
//! Implements [`VersionControl`] by running the `git` binary inside the
//! project root.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::process::ToolCommand;
use crate::domain::ports::{VcsError, VersionControl};
use crate::domain::services::MANAGED_FILES;

pub struct GitCli {
    git: PathBuf,
    root: PathBuf,
}

impl GitCli {
    pub fn new(git: impl Into<PathBuf>, root: &Path) -> Self {
        Self {
            git: git.into(),
            root: root.to_path_buf(),
        }
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new(&self.git).current_dir(&self.root)
    }

    /// Run `git <args>` and return trimmed stdout.
    fn run(&self, args: &[&str]) -> Result<String, VcsError> {
        let output = self
            .command()
            .args(args.iter().copied())
            .output()
            .map_err(|e| VcsError::Spawn(format!("{}: {}", self.git.display(), e)))?;
        if !output.success {
            return Err(VcsError::CommandFailed {
                command: args.join(" "),
                stderr: output.failure_text(),
            });
        }
        Ok(output.stdout.trim_end().to_string())
    }

    pub fn is_available(&self) -> bool {
        ToolCommand::new(&self.git).arg("--version").succeeds()
    }
}

impl VersionControl for GitCli {
    fn is_repository(&self) -> bool {
        match self.run(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(out) => out.trim() == "true",
            Err(err) => {
                debug!("not a repository: {}", err);
                false
            }
        }
    }

    fn changed_paths(&self) -> Result<Vec<String>, VcsError> {
        let out = self.run(&["status", "--porcelain", "--untracked-files=normal"])?;
        // porcelain paths are relative to the repository top level
        let prefix = self.run(&["rev-parse", "--show-prefix"])?;
        Ok(relative_to_prefix(parse_porcelain(&out), &prefix))
    }

    fn head_revision(&self) -> Result<String, VcsError> {
        self.run(&["rev-parse", "HEAD"])
    }

    fn current_branch(&self) -> Result<Option<String>, VcsError> {
        let output = self
            .command()
            .args(["symbolic-ref", "--short", "-q", "HEAD"])
            .output()
            .map_err(|e| VcsError::Spawn(e.to_string()))?;
        if output.success {
            let branch = output.stdout.trim().to_string();
            return Ok((!branch.is_empty()).then_some(branch));
        }
        // exit 1 without output: detached HEAD
        if output.code == Some(1) && output.stderr.trim().is_empty() {
            return Ok(None);
        }
        Err(VcsError::CommandFailed {
            command: "symbolic-ref --short -q HEAD".to_string(),
            stderr: output.failure_text(),
        })
    }

    fn user_name(&self) -> Option<String> {
        self.run(&["config", "user.name"])
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    fn file_changed_since(&self, revision: &str, path: &str) -> Result<bool, VcsError> {
        let out = self.run(&["diff", "--name-only", revision, "HEAD", "--", path])?;
        Ok(!out.trim().is_empty())
    }

    fn stash_push(&self, message: &str) -> Result<(), VcsError> {
        let excludes: Vec<String> = MANAGED_FILES
            .iter()
            .map(|file| format!(":(exclude){}", file))
            .collect();
        let mut args = vec!["stash", "push", "--include-untracked", "-m", message, "--", ":/"];
        args.extend(excludes.iter().map(String::as_str));
        self.run(&args).map(|_| ())
    }

    fn stash_pop(&self) -> Result<(), VcsError> {
        self.run(&["stash", "pop"]).map(|_| ())
    }

    fn checkout(&self, revision: &str) -> Result<(), VcsError> {
        self.run(&["checkout", "--quiet", revision]).map(|_| ())
    }

    fn checkout_previous(&self) -> Result<(), VcsError> {
        self.run(&["checkout", "--quiet", "-"]).map(|_| ())
    }
}

/// Paths from `git status --porcelain` (v1) output.
///
/// Renames yield the new path; quoted paths are unquoted.
pub fn parse_porcelain(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.len() > 3)
        .map(|line| {
            let path = &line[3..];
            let path = path.rsplit_once(" -> ").map(|(_, to)| to).unwrap_or(path);
            unquote(path)
        })
        .filter(|path| !path.is_empty())
        .collect()
}

/// Strip the project's path below the repository root (`--show-prefix`,
/// e.g. `site/`). Paths outside the project stay repository-relative.
fn relative_to_prefix(paths: Vec<String>, prefix: &str) -> Vec<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .map(|path| match path.strip_prefix(prefix) {
            Some(rel) if !rel.is_empty() => rel.to_string(),
            _ => path,
        })
        .collect()
}

fn unquote(path: &str) -> String {
    let path = path.trim();
    match path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => path.to_string(),
    }
}
