//! Rollback result

use crate::application::push::PushReport;

/// Result of a successful rollback
#[derive(Debug, Clone)]
pub struct RollbackReport {
    /// Ordinal of the restored deployment
    pub ordinal: usize,
    pub revision: String,
    pub stashed: bool,
    /// The full push of the old revision
    pub push: PushReport,
    /// Whether `git checkout -` returned to the previous checkout
    pub restored: bool,
    pub warnings: Vec<String>,
}

impl RollbackReport {
    pub fn short_revision(&self) -> &str {
        self.revision.get(..7).unwrap_or(&self.revision)
    }

    /// Warnings from the rollback itself and from the push it ran
    pub fn all_warnings(&self) -> impl Iterator<Item = &String> {
        self.push.warnings.iter().chain(self.warnings.iter())
    }
}
