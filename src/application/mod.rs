//! Application Layer
//!
//! Use cases that orchestrate the domain and its ports:
//!
//! - `push` - stash, build, install, transfer, record
//! - `rollback` - check out an earlier revision and redeploy it
//! - `init` - defaults and helpers for creating a profile
//! - `history` - newest-first listing of recorded deployments
//! - `status` - read-only summary of profile, repository and tools

pub mod context;
pub mod history;
pub mod init;
pub mod push;
pub mod rollback;
pub mod status;

#[cfg(test)]
mod testing;

pub use context::DeployContext;
pub use history::{list_history, HistoryEntry, HistoryListing};
pub use push::{PushOptions, PushReport, PushUseCase, StepOutcome};
pub use rollback::{RollbackOptions, RollbackReport, RollbackUseCase};
pub use status::{collect_status, RepositoryStatus, StatusReport, ToolAvailability};
