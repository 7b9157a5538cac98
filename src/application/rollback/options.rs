//! Rollback options

/// Options for the rollback command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollbackOptions {
    /// 1-based ordinal of the deployment to restore (None = ask)
    pub target: Option<usize>,
    /// Answer every confirmation with yes
    pub assume_yes: bool,
}

impl RollbackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: Option<usize>) -> Self {
        self.target = target;
        self
    }

    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}
