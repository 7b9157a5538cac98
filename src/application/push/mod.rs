//! Push Use Case
//!
//! Publishes the working tree to the FTP host and records the deployment.

mod options;
mod result;
mod use_case;


pub use options::PushOptions;
pub use result::{PushReport, StepOutcome};
pub use use_case::{operating_user, PushUseCase, STASH_MESSAGE};
