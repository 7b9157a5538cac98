//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git` - VersionControl over the git CLI
//! - `transfer/` - git-ftp and ncftpput transfer tools
//! - `toolchain` / `probe` - npm, composer and curl
//! - `repositories/` - profile persistence
//! - `events/` - NDJSON event output

pub mod events;
pub mod git;
pub mod probe;
pub mod process;
pub mod prompt;
pub mod repositories;
pub mod toolchain;
pub mod transfer;

use crate::application::ToolAvailability;
use crate::config::ToolPaths;

// Re-export for convenience
pub use events::JsonEventSink;
pub use git::GitCli;
pub use probe::CurlProbe;
pub use process::ToolCommand;
pub use prompt::DialoguerPrompter;
pub use repositories::JsonProfileRepository;
pub use toolchain::NpmComposer;
pub use transfer::{GitFtpTransfer, NcftpTransfer};

/// Check which external programs can be started.
pub fn tool_availability(paths: &ToolPaths) -> Vec<ToolAvailability> {
    let check = |name: &'static str, command: ToolCommand| ToolAvailability {
        name,
        available: command.succeeds(),
    };
    vec![
        check("git", ToolCommand::new(&paths.git).arg("--version")),
        check(
            "git-ftp",
            ToolCommand::new(&paths.git_ftp).args(["ftp", "--version"]),
        ),
        ToolAvailability {
            name: "ncftpput",
            available: ToolCommand::new(&paths.ncftpput).can_spawn(),
        },
        check("curl", ToolCommand::new(&paths.curl).arg("--version")),
        check("npm", ToolCommand::new(&paths.npm).arg("--version")),
        check("composer", ToolCommand::new(&paths.composer).arg("--version")),
    ]
}
