//! ProfileRepository port - abstraction for profile persistence
//!
//! Lets use cases load and save the deployment profile without knowing
//! about the on-disk JSON layout.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::DeploymentProfile;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("no deployment profile at {} - run `ftpush init` first", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid deployment profile {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded profile plus keys that were present but not understood.
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: DeploymentProfile,
    pub unknown_keys: Vec<String>,
}

/// Abstract repository for the deployment profile
pub trait ProfileRepository {
    /// Whether a profile exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Load the profile at `path`
    fn load(&self, path: &Path) -> Result<LoadedProfile, ProfileError>;

    /// Replace the profile at `path`
    fn save(&self, profile: &DeploymentProfile, path: &Path) -> Result<(), ProfileError>;
}
