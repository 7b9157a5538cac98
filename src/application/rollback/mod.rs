//! Rollback Use Case
//!
//! Redeploys the revision of an earlier deployment:
//! - Resolving the target ordinal (explicit or picked interactively)
//! - Setting local changes aside
//! - Checking out the old revision and running a full push
//! - Returning to the previous checkout

mod options;
mod result;
mod use_case;


pub use options::RollbackOptions;
pub use result::RollbackReport;
pub use use_case::RollbackUseCase;
