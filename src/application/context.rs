//! Deploy Context
//!
//! The collaborators shared by the push and rollback use cases.

use std::path::Path;

use crate::config::CredentialOverrides;
use crate::domain::ports::{
    BuildTools, ConnectivityProbe, ProfileRepository, Prompter, PushEventSink, TransferTool,
    VersionControl,
};

/// Everything a push or rollback needs besides the profile itself.
///
/// `transfers` is in preference order; the planner still favors an
/// incremental tool whenever a repository exists.
pub struct DeployContext<'a> {
    pub root: &'a Path,
    pub profile_path: &'a Path,
    pub overrides: &'a CredentialOverrides,
    pub vcs: &'a dyn VersionControl,
    pub transfers: Vec<&'a dyn TransferTool>,
    pub tools: &'a dyn BuildTools,
    pub probe: &'a dyn ConnectivityProbe,
    pub profiles: &'a dyn ProfileRepository,
    pub prompter: &'a dyn Prompter,
    pub events: &'a dyn PushEventSink,
}
