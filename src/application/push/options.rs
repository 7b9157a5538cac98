//! Push Options

/// Options for the push use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushOptions {
    /// Upload everything instead of the delta since the last deployment
    pub full: bool,
    /// Report what would happen without stashing, building or recording
    pub dry_run: bool,
    /// Stash unrelated local changes before building (off during rollback,
    /// which stashes on its own terms)
    pub stash_local_changes: bool,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            full: false,
            dry_run: false,
            stash_local_changes: true,
        }
    }
}

impl PushOptions {
    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Options used when redeploying an old revision
    pub fn for_rollback() -> Self {
        Self {
            full: true,
            dry_run: false,
            stash_local_changes: false,
        }
    }
}
