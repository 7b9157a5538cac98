//! Domain Entities

pub mod history;
pub mod profile;

pub use history::{DeploymentRecord, History, HistoryError, MAX_HISTORY, ROLLBACK_CANDIDATES};
pub use profile::{
    DeployPolicy, DeploymentProfile, FtpCredentials, ProjectDescriptor, DEFAULT_FTP_PORT,
    PROFILE_FILE_NAME,
};
