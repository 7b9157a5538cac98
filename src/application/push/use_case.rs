//! Push Use Case
//!
//! Orchestrates a deployment:
//! 1. Pre-flight: repository presence, connectivity probe, tool selection
//! 2. Stash local changes that are not build artifacts
//! 3. Build assets (failure only warns)
//! 4. Install PHP dependencies when the lock file changed
//! 5. Transfer (failure aborts and leaves the stash in place)
//! 6. Append the deployment record and save the profile
//! 7. Restore the stash

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::entities::{DeploymentProfile, DeploymentRecord};
use crate::domain::ports::{PushEvent, Stage, TransferRequest, VersionControl};
use crate::domain::services::{
    decide_install, plan_transfer_mode, select_transfer_tool, unrelated_changes, InstallDecision,
};
use crate::domain::value_objects::{PathPatterns, ProjectType};
use crate::error::{FtpushError, FtpushResult};

use super::super::context::DeployContext;
use super::options::PushOptions;
use super::result::{PushReport, StepOutcome};

/// Message attached to the automatic stash
pub const STASH_MESSAGE: &str = "ftpush: local changes set aside during deploy";

/// Push use case - one deployment of the working tree
pub struct PushUseCase<'c, 'a> {
    ctx: &'c DeployContext<'a>,
}

impl<'c, 'a> PushUseCase<'c, 'a> {
    pub fn new(ctx: &'c DeployContext<'a>) -> Self {
        Self { ctx }
    }

    /// Execute the push.
    ///
    /// On success the profile's history holds the new record and has been
    /// saved (unless `dry_run`).
    pub fn execute(
        &self,
        profile: &mut DeploymentProfile,
        options: &PushOptions,
    ) -> FtpushResult<PushReport> {
        let ctx = self.ctx;
        let ftp = ctx.overrides.apply(&profile.ftp);
        let mut warnings = Vec::new();

        self.emit(PushEvent::Started {
            root: ctx.root.to_path_buf(),
            target: ftp.url(),
            dry_run: options.dry_run,
        });

        // Pre-flight
        let repository = ctx.vcs.is_repository();
        let probe = ctx.probe.probe(&ftp);
        if !probe.reachable {
            let message = format!(
                "{} did not answer the connectivity probe{}",
                ftp.url(),
                probe
                    .detail
                    .as_deref()
                    .map(|d| format!(": {}", d))
                    .unwrap_or_default()
            );
            info!("{}", message);
            warnings.push(message);
        }
        self.emit(PushEvent::Probed {
            outcome: probe.clone(),
        });

        let tool = select_transfer_tool(&ctx.transfers, repository, ftp.secure)
            .map_err(FtpushError::NoTransferTool)?;
        let mode = plan_transfer_mode(tool.is_incremental(), profile.history.is_empty(), options.full);
        info!(tool = tool.name(), mode = mode.as_str(), repository, "push planned");
        self.emit(PushEvent::Preflight {
            repository,
            tool: tool.name(),
            mode,
        });

        let project_type = profile.project.project_type;
        let excludes = profile.policy.normalized_excludes();
        PathPatterns::new(ctx.root, &excludes)?;
        let artifact_list: Vec<String> = project_type
            .artifact_patterns()
            .iter()
            .map(|p| p.to_string())
            .collect();
        let artifacts = PathPatterns::new(ctx.root, &artifact_list)?;

        // Stash
        let mut stashed = false;
        if repository && options.stash_local_changes {
            let changed = ctx.vcs.changed_paths()?;
            let unrelated = unrelated_changes(&changed, &artifacts);
            debug!(changed = changed.len(), unrelated = unrelated.len(), "local changes");
            if unrelated.is_empty() {
                self.skip(Stage::Stash, "no local changes besides build output");
            } else if options.dry_run {
                self.skip(
                    Stage::Stash,
                    format!("dry run - would stash {} local change(s)", unrelated.len()),
                );
            } else {
                self.emit(PushEvent::StageStarted {
                    stage: Stage::Stash,
                    detail: format!("stashing {} local change(s)", unrelated.len()),
                });
                ctx.vcs.stash_push(STASH_MESSAGE)?;
                stashed = true;
                self.finish(Stage::Stash, None);
            }
        }

        let build = self.build_assets(profile, options, &mut warnings);

        let install = match self.install_packages(profile, repository, options) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.leave_stash_notice(stashed, &mut warnings);
                return Err(err);
            }
        };

        // Transfer
        self.emit(PushEvent::StageStarted {
            stage: Stage::Transfer,
            detail: format!("{} {}", tool.name(), mode.as_str()),
        });
        let request = TransferRequest {
            root: ctx.root,
            ftp: &ftp,
            mode,
            excludes: &excludes,
            artifacts: &artifact_list,
            dry_run: options.dry_run,
        };
        let outcome = match tool.transfer(&request) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(tool = tool.name(), "transfer failed: {}", err);
                self.leave_stash_notice(stashed, &mut warnings);
                return Err(err.into());
            }
        };
        self.finish(
            Stage::Transfer,
            outcome.files.map(|n| {
                if options.dry_run {
                    format!("{} file(s) would be uploaded", n)
                } else {
                    format!("{} file(s) uploaded", n)
                }
            }),
        );

        // Record
        let mut ordinal = None;
        let mut revision = None;
        let mut save_error = None;
        if options.dry_run {
            self.skip(Stage::Record, "dry run - history unchanged");
        } else {
            revision = if repository {
                ctx.vcs.head_revision().ok()
            } else {
                None
            };
            let record = DeploymentRecord::new(
                Utc::now(),
                operating_user(ctx.vcs),
                mode.kind(),
                revision.clone(),
            );
            let new_ordinal = profile.history.push(record);
            profile.normalize();
            match ctx.profiles.save(profile, ctx.profile_path) {
                Ok(()) => {
                    ordinal = Some(new_ordinal);
                    self.emit(PushEvent::Recorded {
                        ordinal: new_ordinal,
                        kind: mode.kind(),
                        revision: revision.clone(),
                    });
                }
                Err(err) => save_error = Some(err),
            }
        }

        let unstashed = stashed && self.restore_stash(&mut warnings);

        if let Some(err) = save_error {
            return Err(err.into());
        }

        self.emit(PushEvent::Completed {
            dry_run: options.dry_run,
            files: outcome.files,
        });

        Ok(PushReport {
            dry_run: options.dry_run,
            repository,
            probe,
            tool: tool.name(),
            mode,
            stashed,
            unstashed,
            build,
            install,
            files: outcome.files,
            ordinal,
            revision,
            warnings,
        })
    }

    fn build_assets(
        &self,
        profile: &DeploymentProfile,
        options: &PushOptions,
        warnings: &mut Vec<String>,
    ) -> StepOutcome {
        if !profile.policy.build_assets {
            return self.skip(Stage::Build, "disabled in profile");
        }
        if !ProjectType::has_asset_pipeline(self.ctx.root) {
            return self.skip(Stage::Build, "no package.json");
        }
        if options.dry_run {
            return self.skip(Stage::Build, "dry run - would run the asset build");
        }

        self.emit(PushEvent::StageStarted {
            stage: Stage::Build,
            detail: "building assets".to_string(),
        });
        match self.ctx.tools.build_assets() {
            Ok(()) => {
                self.finish(Stage::Build, None);
                StepOutcome::Ran
            }
            Err(err) => {
                let message = format!("asset build failed, continuing: {}", err);
                info!("{}", message);
                self.warn(Stage::Build, &message);
                warnings.push(message);
                StepOutcome::Failed(err.to_string())
            }
        }
    }

    fn install_packages(
        &self,
        profile: &DeploymentProfile,
        repository: bool,
        options: &PushOptions,
    ) -> FtpushResult<StepOutcome> {
        let lock_file = profile.project.project_type.package_lock_file();
        let lock_exists = lock_file
            .map(|f| self.ctx.root.join(f).is_file())
            .unwrap_or(false);

        let lock_changed = match (lock_file, profile.last_revision()) {
            (Some(file), Some(rev)) if repository && lock_exists => {
                match self.ctx.vcs.file_changed_since(rev, file) {
                    Ok(changed) => Some(changed),
                    Err(err) => {
                        debug!("cannot compare {} against {}: {}", file, rev, err);
                        None
                    }
                }
            }
            _ => None,
        };

        match decide_install(
            profile.policy.run_package_install,
            lock_file,
            lock_exists,
            lock_changed,
        ) {
            InstallDecision::Skip(reason) => Ok(self.skip(Stage::Install, reason)),
            InstallDecision::Run(reason) if options.dry_run => Ok(self.skip(
                Stage::Install,
                format!("dry run - would install dependencies ({})", reason),
            )),
            InstallDecision::Run(reason) => {
                self.emit(PushEvent::StageStarted {
                    stage: Stage::Install,
                    detail: reason,
                });
                self.ctx.tools.install_packages()?;
                self.finish(Stage::Install, None);
                Ok(StepOutcome::Ran)
            }
        }
    }

    /// Pop the stash; `false` when it stays in place.
    fn restore_stash(&self, warnings: &mut Vec<String>) -> bool {
        self.emit(PushEvent::StageStarted {
            stage: Stage::Unstash,
            detail: "restoring local changes".to_string(),
        });
        match self.ctx.vcs.stash_pop() {
            Ok(()) => {
                self.finish(Stage::Unstash, None);
                true
            }
            Err(err) => {
                let message = format!(
                    "could not restore stashed changes ({}); run `git stash pop` manually",
                    err
                );
                info!("{}", message);
                self.warn(Stage::Unstash, &message);
                warnings.push(message);
                false
            }
        }
    }

    fn leave_stash_notice(&self, stashed: bool, warnings: &mut Vec<String>) {
        if !stashed {
            return;
        }
        let message =
            "local changes remain stashed; restore them with `git stash pop`".to_string();
        self.warn(Stage::Unstash, &message);
        warnings.push(message);
    }

    fn emit(&self, event: PushEvent) {
        self.ctx.events.on_event(event);
    }

    fn skip(&self, stage: Stage, reason: impl Into<String>) -> StepOutcome {
        let reason = reason.into();
        self.emit(PushEvent::StageSkipped {
            stage,
            reason: reason.clone(),
        });
        StepOutcome::Skipped(reason)
    }

    fn finish(&self, stage: Stage, detail: Option<String>) {
        self.emit(PushEvent::StageFinished { stage, detail });
    }

    fn warn(&self, stage: Stage, message: &str) {
        self.emit(PushEvent::StageWarning {
            stage,
            message: message.to_string(),
        });
    }
}

/// Name recorded as the operating user: git `user.name`, else `$USER` /
/// `$USERNAME`, else `unknown`.
pub fn operating_user(vcs: &dyn VersionControl) -> String {
    vcs.user_name()
        .or_else(|| std::env::var("USER").ok())
        .or_else(|| std::env::var("USERNAME").ok())
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
