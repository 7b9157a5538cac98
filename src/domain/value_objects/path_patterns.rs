//! Path patterns value object
//!
//! Gitignore-style matching for exclusions and build artifacts.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use thiserror::Error;

/// A compiled set of gitignore-style patterns rooted at the project.
#[derive(Debug)]
pub struct PathPatterns {
    matcher: Gitignore,
    patterns: Vec<String>,
}

impl PathPatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            patterns: Vec::new(),
        }
    }

    /// Compile patterns relative to `root`.
    ///
    /// Blank lines and `#` comments are skipped, matching `.gitignore` files.
    pub fn new<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<Self, PatternError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut kept = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, pattern)
                .map_err(|e| PatternError::Invalid {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            kept.push(pattern.to_string());
        }

        let matcher = builder.build().map_err(|e| PatternError::Invalid {
            pattern: kept.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            patterns: kept,
        })
    }

    /// Check a project-relative path against the set.
    ///
    /// A path also matches when any of its parent directories does.
    pub fn is_match(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PathPatterns {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid path pattern '{pattern}': {message}")]
    Invalid { pattern: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> PathPatterns {
        PathPatterns::new(Path::new("/project"), list).unwrap()
    }

    #[test]
    fn empty_matches_nothing() {
        let p = PathPatterns::empty();
        assert!(!p.is_match(Path::new("anything.txt"), false));
        assert!(p.is_empty());
    }

    #[test]
    fn directory_pattern_matches_nested_files() {
        let p = patterns(&["node_modules/"]);
        assert!(p.is_match(Path::new("node_modules/lodash/index.js"), false));
        assert!(!p.is_match(Path::new("src/node_modules.rs"), false));
    }

    #[test]
    fn anchored_pattern_only_matches_at_root() {
        let p = patterns(&["/public/build"]);
        assert!(p.is_match(Path::new("public/build/app.js"), false));
        assert!(!p.is_match(Path::new("theme/public/build/app.js"), false));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let p = patterns(&["# header", "", ".env"]);
        assert_eq!(p.patterns(), [".env".to_string()]);
        assert!(p.is_match(Path::new(".env"), false));
    }

    #[test]
    fn negation_reincludes_path() {
        let p = patterns(&["*.log", "!keep.log"]);
        assert!(p.is_match(Path::new("debug.log"), false));
        assert!(!p.is_match(Path::new("keep.log"), false));
    }
}
