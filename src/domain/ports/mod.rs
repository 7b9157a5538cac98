//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations backed by
//! external programs.

pub mod profile_repository;
pub mod prompter;
pub mod push_events;
pub mod toolchain;
pub mod transfer;
pub mod version_control;

pub use profile_repository::{LoadedProfile, ProfileError, ProfileRepository};
pub use prompter::{AssumeYes, PromptError, Prompter};
pub use push_events::{NoopEventSink, PushEvent, PushEventSink, Stage};
pub use toolchain::{BuildTools, ConnectivityProbe, ProbeOutcome, ToolError};
pub use transfer::{TransferError, TransferMode, TransferOutcome, TransferRequest, TransferTool};
pub use version_control::{VcsError, VersionControl};
