//! Transfer tools
//!
//! - `git_ftp` - incremental uploads driven by git history (FTP and FTPS)
//! - `ncftp` - full mirror of a staged copy of the tree (FTP only)

pub mod git_ftp;
pub mod ncftp;
pub mod staging;

pub use git_ftp::GitFtpTransfer;
pub use ncftp::NcftpTransfer;
pub use staging::{stage_tree, StagedTree, StagingError};
