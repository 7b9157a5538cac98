//! `ftpush init` - interactive profile creation

use anyhow::{bail, Context, Result};
use dialoguer::theme::Theme;
use dialoguer::{Confirm, Input, Password, Select};

use ftpush::application::init::{
    append_to_gitignore, build_profile, defaults_for, defaults_for_type, format_exclude_list,
    gitignore_covers, parse_exclude_list, InitAnswers,
};
use ftpush::domain::entities::{DeployPolicy, FtpCredentials, ProjectDescriptor, DEFAULT_FTP_PORT};
use ftpush::domain::ports::ProfileRepository;
use ftpush::infrastructure::prompt::prompt_theme;
use ftpush::presentation::Toolbox;
use ftpush::{DeploymentProfile, ProjectType, PROFILE_FILE_NAME};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn non_empty(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("a value is required")
    } else {
        Ok(())
    }
}

/// Existing profile to replace, if any. Its values become the defaults.
fn previous_profile(toolbox: &Toolbox, force: bool) -> Result<Option<DeploymentProfile>> {
    if !toolbox.profiles.exists(&toolbox.profile_path) {
        return Ok(None);
    }
    if !force {
        bail!(
            "{} already exists; rerun with --force to replace it (history is kept)",
            toolbox.profile_path.display()
        );
    }
    match toolbox.profiles.load(&toolbox.profile_path) {
        Ok(loaded) => Ok(Some(loaded.profile)),
        Err(err) => {
            tracing::debug!("replacing unreadable profile: {}", err);
            eprintln!("warning: {} - starting from detected defaults", err);
            Ok(None)
        }
    }
}

fn ask(theme: &dyn Theme, toolbox: &Toolbox, previous: Option<&DeploymentProfile>) -> Result<InitAnswers> {
    let root = toolbox.root.as_path();
    let detected = match previous {
        Some(p) => p.project.project_type,
        None => defaults_for(root).project_type,
    };

    let labels: Vec<String> = ProjectType::ALL
        .iter()
        .map(|t| t.display_name().to_string())
        .collect();
    let default_index = ProjectType::ALL
        .iter()
        .position(|t| *t == detected)
        .unwrap_or(0);
    let choice = Select::with_theme(theme)
        .with_prompt("Project type")
        .items(&labels)
        .default(default_index)
        .interact()?;
    let project_type = ProjectType::ALL[choice];
    let defaults = defaults_for_type(root, project_type);

    let name: String = Input::with_theme(theme)
        .with_prompt("Project name")
        .default(previous.map(|p| p.project.name.clone()).unwrap_or(defaults.name))
        .validate_with(non_empty)
        .interact_text()?;

    let old_ftp = previous.map(|p| &p.ftp);
    let mut host = Input::<String>::with_theme(theme)
        .with_prompt("FTP host")
        .validate_with(non_empty);
    if let Some(ftp) = old_ftp {
        host = host.default(ftp.host.clone());
    }
    let host = host.interact_text()?;

    let port: u16 = Input::with_theme(theme)
        .with_prompt("Port")
        .default(old_ftp.map(|f| f.port).unwrap_or(DEFAULT_FTP_PORT))
        .interact_text()?;

    let mut username = Input::<String>::with_theme(theme)
        .with_prompt("Username")
        .validate_with(non_empty);
    if let Some(ftp) = old_ftp {
        username = username.default(ftp.username.clone());
    }
    let username = username.interact_text()?;

    let password_prompt = if old_ftp.is_some() {
        "Password (empty keeps the current one)"
    } else {
        "Password"
    };
    let mut password = Password::with_theme(theme)
        .with_prompt(password_prompt)
        .allow_empty_password(true)
        .interact()?;
    if password.is_empty() {
        if let Some(ftp) = old_ftp {
            password = ftp.password.clone();
        }
    }

    let remote_path: String = Input::with_theme(theme)
        .with_prompt("Remote path")
        .default(old_ftp.map(|f| f.remote_path.clone()).unwrap_or_else(|| "/".to_string()))
        .interact_text()?;

    let secure = Confirm::with_theme(theme)
        .with_prompt("Use FTPS (explicit TLS)?")
        .default(old_ftp.map(|f| f.secure).unwrap_or(false))
        .interact()?;

    let old_policy = previous.map(|p| &p.policy);
    let build_assets = Confirm::with_theme(theme)
        .with_prompt("Build assets with `npm run build` before upload?")
        .default(old_policy.map(|p| p.build_assets).unwrap_or(defaults.build_assets))
        .interact()?;
    let run_package_install = Confirm::with_theme(theme)
        .with_prompt("Run `composer install` when composer.lock changed?")
        .default(
            old_policy
                .map(|p| p.run_package_install)
                .unwrap_or(defaults.run_package_install),
        )
        .interact()?;

    let excludes = old_policy
        .map(|p| p.exclude.clone())
        .unwrap_or(defaults.excludes);
    let excludes: String = Input::with_theme(theme)
        .with_prompt("Exclude (comma-separated)")
        .default(format_exclude_list(&excludes))
        .allow_empty(true)
        .interact_text()?;

    Ok(InitAnswers {
        project: ProjectDescriptor { project_type, name },
        ftp: FtpCredentials {
            host: host.trim().to_string(),
            port,
            username: username.trim().to_string(),
            password,
            remote_path: remote_path.trim().to_string(),
            secure,
        },
        policy: DeployPolicy {
            build_assets,
            run_package_install,
            exclude: parse_exclude_list(&excludes),
        },
    })
}

pub fn cmd_init(ui: &UiContext, force: bool) -> Result<()> {
    let toolbox = super::open_toolbox(ui)?;
    let previous = previous_profile(&toolbox, force)?;

    if !ui.caps.interactive {
        bail!("ftpush init asks for the FTP settings and needs an interactive terminal");
    }

    let mut header = CommandHeader::new(Icon::Init, "ftpush init");
    header.add("Root", toolbox.root.display().to_string());
    eprintln!("{}", header.render(ui.color, ui.unicode));

    let theme = prompt_theme(ui.colored_prompts());
    let answers = ask(theme.as_ref(), &toolbox, previous.as_ref())?;
    let profile = build_profile(answers, previous.as_ref());
    toolbox
        .profiles
        .save(&profile, &toolbox.profile_path)
        .context("failed to write the deployment profile")?;

    let mut gitignored = gitignore_covers(&toolbox.root);
    if !gitignored {
        eprintln!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!(
                "{} stores the FTP password in plaintext and is not in .gitignore",
                PROFILE_FILE_NAME
            ))
            .render(ui.color)
        );
        let add = Confirm::with_theme(theme.as_ref())
            .with_prompt(format!("Add {} to .gitignore?", PROFILE_FILE_NAME))
            .default(true)
            .interact()?;
        if add {
            append_to_gitignore(&toolbox.root).context("failed to update .gitignore")?;
            gitignored = true;
        }
    }

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": toolbox.profile_path.display().to_string(),
            "records": profile.history.len(),
            "gitignored": gitignored,
        }))?;
        return Ok(());
    }

    let mut summary = ResultSummary::success(format!("Wrote {}", toolbox.profile_path.display()));
    summary.add_fact(format!(
        "{} project, target {}",
        profile.project.project_type.display_name(),
        profile.ftp_url()
    ));
    if !profile.history.is_empty() {
        summary.add_fact(format!("{} recorded deployments kept", profile.history.len()));
    }
    if !gitignored {
        summary.add_warning(format!("{} is not ignored by git", PROFILE_FILE_NAME));
    }
    summary.with_next_step("ftpush push --dry-run");
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}
