//! Command handlers
//!
//! Each handler resolves the project root, wires the adapters and renders
//! the use-case result as text or JSON.

pub mod history;
pub mod init;
pub mod project_root;
pub mod push;
pub mod rollback;
pub mod status;

use anyhow::{Context, Result};

use ftpush::domain::ports::{ProfileRepository, PushEventSink};
use ftpush::infrastructure::JsonEventSink;
use ftpush::presentation::{Commands, Toolbox};
use ftpush::DeploymentProfile;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::primitives::icon::Icon;

pub fn dispatch(ui: &UiContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init { force } => init::cmd_init(ui, force),
        Commands::Push { full, dry_run } => push::cmd_push(ui, full, dry_run),
        Commands::History { limit } => history::cmd_history(ui, limit),
        Commands::Status => status::cmd_status(ui),
        Commands::Rollback { target, yes } => rollback::cmd_rollback(ui, target, yes),
    }
}

/// Adapters bound to the discovered project root.
pub(crate) fn open_toolbox(ui: &UiContext) -> Result<Toolbox> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let root = project_root::discover_project_root(&cwd);
    tracing::debug!(root = %root.display(), "project root");
    Ok(Toolbox::from_env(&root, ui.colored_prompts()))
}

/// Load the profile, reporting keys ftpush does not understand.
pub(crate) fn load_profile(toolbox: &Toolbox) -> Result<DeploymentProfile> {
    let loaded = toolbox.profiles.load(&toolbox.profile_path)?;
    for key in &loaded.unknown_keys {
        eprintln!(
            "warning: unknown key '{}' in {} (ignored)",
            key,
            toolbox.profile_path.display()
        );
    }
    Ok(loaded.profile)
}

/// NDJSON events in JSON mode, progress lines otherwise.
pub(crate) fn event_sink(ui: &UiContext, command: &'static str) -> Box<dyn PushEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        Box::new(ConsoleEventSink::new(*ui))
    }
}

/// Header shared by push and rollback.
pub(crate) fn deploy_header(
    icon: Icon,
    title: &str,
    toolbox: &Toolbox,
    profile: &DeploymentProfile,
) -> CommandHeader {
    let ftp = toolbox.overrides.apply(&profile.ftp);
    let mut header = CommandHeader::new(icon, title);
    header.add(
        "Project",
        format!(
            "{} ({})",
            profile.project.name,
            profile.project.project_type.display_name()
        ),
    );
    header.add("Root", toolbox.root.display().to_string());
    header.add("Target", ftp.url());
    header
}
