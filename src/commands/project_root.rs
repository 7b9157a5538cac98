use std::path::{Path, PathBuf};

use ftpush::PROFILE_FILE_NAME;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (walking upward from `start`):
/// - nearest directory holding `.ftpush.json`
/// - otherwise nearest `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    if let Some(dir) = start
        .ancestors()
        .find(|dir| dir.join(PROFILE_FILE_NAME).is_file())
    {
        return dir.to_path_buf();
    }
    if let Some(dir) = start.ancestors().find(|dir| dir.join(".git").exists()) {
        return dir.to_path_buf();
    }
    start.to_path_buf()
}
