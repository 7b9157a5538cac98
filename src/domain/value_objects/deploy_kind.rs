//! Deploy kind value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a deployment uploaded files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployKind {
    /// Entire tree uploaded (ncftpput mirror, git-ftp init or `--all`)
    Full,
    /// Only files changed since the last deployed commit (git-ftp push)
    Incremental,
}

impl DeployKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployKind::Full => "full",
            DeployKind::Incremental => "incremental",
        }
    }
}

impl fmt::Display for DeployKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeployKind::Incremental).unwrap(),
            "\"incremental\""
        );
        let kind: DeployKind = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(kind, DeployKind::Full);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(serde_json::from_str::<DeployKind>("\"partial\"").is_err());
    }
}
