//! Push Result

use crate::domain::ports::{ProbeOutcome, TransferMode};
use crate::domain::value_objects::DeployKind;

/// What happened to an optional step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Ran,
    Skipped(String),
    /// Failed without aborting the push
    Failed(String),
}

impl StepOutcome {
    pub fn ran(&self) -> bool {
        matches!(self, StepOutcome::Ran)
    }
}

/// Result of a successful push
#[derive(Debug, Clone)]
pub struct PushReport {
    pub dry_run: bool,
    pub repository: bool,
    pub probe: ProbeOutcome,
    pub tool: &'static str,
    pub mode: TransferMode,
    pub stashed: bool,
    /// The stash was popped again; `false` leaves it in `git stash list`
    pub unstashed: bool,
    pub build: StepOutcome,
    pub install: StepOutcome,
    pub files: Option<usize>,
    /// Ordinal of the appended record (`None` for dry runs)
    pub ordinal: Option<usize>,
    pub revision: Option<String>,
    pub warnings: Vec<String>,
}

impl PushReport {
    pub fn kind(&self) -> DeployKind {
        self.mode.kind()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
