//! npm / composer adapter

use std::path::{Path, PathBuf};

use tracing::info;

use super::process::ToolCommand;
use crate::domain::ports::{BuildTools, ToolError};

pub struct NpmComposer {
    npm: PathBuf,
    composer: PathBuf,
    root: PathBuf,
}

impl NpmComposer {
    pub fn new(npm: impl Into<PathBuf>, composer: impl Into<PathBuf>, root: &Path) -> Self {
        Self {
            npm: npm.into(),
            composer: composer.into(),
            root: root.to_path_buf(),
        }
    }

    fn run(&self, tool: &str, command: ToolCommand) -> Result<(), ToolError> {
        let command_line = command.display();
        let output = command
            .current_dir(&self.root)
            .output()
            .map_err(|e| ToolError::Spawn {
                tool: tool.to_string(),
                message: e.to_string(),
            })?;
        if !output.success {
            return Err(ToolError::Failed {
                tool: tool.to_string(),
                code: output.code,
                stderr: output.failure_text(),
            });
        }
        info!(command = %command_line, "done");
        Ok(())
    }
}

impl BuildTools for NpmComposer {
    fn build_assets(&self) -> Result<(), ToolError> {
        self.run("npm", ToolCommand::new(&self.npm).args(["run", "build"]))
    }

    fn install_packages(&self) -> Result<(), ToolError> {
        self.run(
            "composer",
            ToolCommand::new(&self.composer).args([
                "install",
                "--no-dev",
                "--optimize-autoloader",
                "--no-interaction",
            ]),
        )
    }
}
