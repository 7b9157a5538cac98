//! ncftpput transfer tool
//!
//! Full mirror: the working tree minus exclusions is staged and uploaded
//! recursively. Works outside git repositories; plain FTP only.

use std::path::PathBuf;

use tracing::info;

use super::staging::stage_tree;
use crate::domain::ports::{TransferError, TransferOutcome, TransferRequest, TransferTool};
use crate::infrastructure::process::ToolCommand;

const NAME: &str = "ncftpput";

pub struct NcftpTransfer {
    program: PathBuf,
}

impl NcftpTransfer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl TransferTool for NcftpTransfer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        // ncftpput exits non-zero without arguments; starting is enough
        ToolCommand::new(&self.program).can_spawn()
    }

    fn is_incremental(&self) -> bool {
        false
    }

    fn supports_secure(&self) -> bool {
        false
    }

    fn transfer(&self, request: &TransferRequest<'_>) -> Result<TransferOutcome, TransferError> {
        if request.ftp.secure {
            return Err(TransferError::Unsupported {
                tool: NAME,
                reason: "ncftpput cannot connect over FTPS".to_string(),
            });
        }

        let staged = stage_tree(request.root, request.excludes).map_err(|e| TransferError::Io {
            tool: NAME,
            message: e.to_string(),
        })?;
        let files = staged.files();
        info!(files, "staged tree for mirror upload");

        if request.dry_run || files == 0 {
            return Ok(TransferOutcome { files: Some(files) });
        }

        let entries = staged.entries().map_err(|e| TransferError::Io {
            tool: NAME,
            message: e.to_string(),
        })?;
        let ftp = request.ftp;
        let command = ToolCommand::new(&self.program)
            .args(["-R", "-m"])
            .args(["-u", ftp.username.as_str()])
            .arg("-p")
            .secret_arg(ftp.password.as_str())
            .arg("-P")
            .arg(ftp.port.to_string())
            .arg(ftp.host.as_str())
            .arg(ftp.normalized_remote_path())
            .args(entries)
            .current_dir(staged.path());

        let output = command.output().map_err(|e| TransferError::Io {
            tool: NAME,
            message: format!("failed to run {}: {}", self.program.display(), e),
        })?;
        if !output.success {
            return Err(TransferError::CommandFailed {
                tool: NAME,
                code: output.code,
                stderr: output.failure_text(),
            });
        }
        Ok(TransferOutcome { files: Some(files) })
    }
}
