//! Rollback use case implementation

use tracing::{debug, info};

use crate::application::context::DeployContext;
use crate::application::push::{PushOptions, PushUseCase};
use crate::domain::entities::{DeploymentProfile, HistoryError};
use crate::domain::ports::{AssumeYes, Prompter, PushEvent, Stage};
use crate::domain::services::user_changes;
use crate::error::{FtpushError, FtpushResult};

use super::options::RollbackOptions;
use super::result::RollbackReport;

const ROLLBACK_STASH_MESSAGE: &str = "ftpush: local changes set aside during rollback";

/// Rollback use case
pub struct RollbackUseCase<'c, 'a> {
    ctx: &'c DeployContext<'a>,
}

impl<'c, 'a> RollbackUseCase<'c, 'a> {
    pub fn new(ctx: &'c DeployContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn execute(
        &self,
        profile: &mut DeploymentProfile,
        options: &RollbackOptions,
    ) -> FtpushResult<RollbackReport> {
        let ctx = self.ctx;
        let prompter: &dyn Prompter = if options.assume_yes {
            &AssumeYes
        } else {
            ctx.prompter
        };

        profile.history.ensure_rollback_possible()?;
        let ordinal = match options.target {
            Some(ordinal) => ordinal,
            None => self.pick_target(profile, prompter)?,
        };
        let record = profile.history.resolve_rollback_target(ordinal)?;
        let Some(revision) = record.revision().map(str::to_string) else {
            return Err(HistoryError::MissingRevision { ordinal }.into());
        };
        let short = record.short_revision().unwrap_or(&revision).to_string();
        let deployed_at = record.timestamp_iso();

        if !ctx.vcs.is_repository() {
            return Err(FtpushError::NotARepository {
                path: ctx.root.to_path_buf(),
            });
        }

        // Local changes would block the checkout
        let mut warnings = Vec::new();
        let changed = user_changes(ctx.vcs.changed_paths()?);
        let mut stashed = false;
        if !changed.is_empty() {
            let question = format!(
                "Stash {} uncommitted change(s) before checking out {}?",
                changed.len(),
                short
            );
            if !prompter.confirm(&question, true)? {
                return Err(FtpushError::Aborted);
            }
            self.emit(PushEvent::StageStarted {
                stage: Stage::Stash,
                detail: format!("stashing {} local change(s)", changed.len()),
            });
            ctx.vcs.stash_push(ROLLBACK_STASH_MESSAGE)?;
            stashed = true;
            self.emit(PushEvent::StageFinished {
                stage: Stage::Stash,
                detail: None,
            });
        }

        let target = ctx.overrides.apply(&profile.ftp).url();
        let question = format!(
            "Redeploy #{} ({} from {}) to {}? Remote files will be overwritten.",
            ordinal, short, deployed_at, target
        );
        match prompter.confirm(&question, false) {
            Ok(true) => {}
            Ok(false) => {
                self.restore_stash(stashed, &mut warnings);
                return Err(FtpushError::Aborted);
            }
            Err(err) => {
                self.restore_stash(stashed, &mut warnings);
                return Err(err.into());
            }
        }

        info!(ordinal, revision = %revision, "rolling back");
        self.emit(PushEvent::StageStarted {
            stage: Stage::Checkout,
            detail: format!("checking out {}", short),
        });
        if let Err(err) = ctx.vcs.checkout(&revision) {
            self.restore_stash(stashed, &mut warnings);
            return Err(err.into());
        }
        self.emit(PushEvent::StageFinished {
            stage: Stage::Checkout,
            detail: None,
        });

        let push = match PushUseCase::new(ctx).execute(profile, &PushOptions::for_rollback()) {
            Ok(push) => push,
            Err(err) => {
                debug!(ordinal, "redeploy failed: {}", err);
                self.return_to_previous(&mut warnings);
                if stashed {
                    self.warning(
                        Stage::Unstash,
                        "local changes remain stashed; restore them with `git stash pop`"
                            .to_string(),
                        &mut warnings,
                    );
                }
                return Err(FtpushError::RollbackFailed {
                    ordinal,
                    source: Box::new(err),
                });
            }
        };

        let restored = self.return_to_previous(&mut warnings);
        if restored {
            self.restore_stash(stashed, &mut warnings);
        } else if stashed {
            self.warning(
                Stage::Unstash,
                "stash kept because the previous checkout could not be restored".to_string(),
                &mut warnings,
            );
        }

        Ok(RollbackReport {
            ordinal,
            revision,
            stashed,
            push,
            restored,
            warnings,
        })
    }

    fn pick_target(
        &self,
        profile: &DeploymentProfile,
        prompter: &dyn Prompter,
    ) -> FtpushResult<usize> {
        let candidates = profile.history.rollback_candidates();
        let items: Vec<String> = candidates
            .iter()
            .map(|(ordinal, record)| {
                format!(
                    "#{} {} {} {} {}",
                    ordinal,
                    record.timestamp_iso(),
                    record.user(),
                    record.kind(),
                    record.short_revision().unwrap_or("-")
                )
            })
            .collect();
        let index = prompter.select("Roll back to which deployment?", &items)?;
        candidates
            .get(index)
            .map(|(ordinal, _)| *ordinal)
            .ok_or(FtpushError::Aborted)
    }

    /// Single `git checkout -` attempt; failure only warns.
    fn return_to_previous(&self, warnings: &mut Vec<String>) -> bool {
        self.emit(PushEvent::StageStarted {
            stage: Stage::Restore,
            detail: "returning to the previous checkout".to_string(),
        });
        match self.ctx.vcs.checkout_previous() {
            Ok(()) => {
                self.emit(PushEvent::StageFinished {
                    stage: Stage::Restore,
                    detail: None,
                });
                true
            }
            Err(err) => {
                self.warning(
                    Stage::Restore,
                    format!("could not return to the previous checkout: {}", err),
                    warnings,
                );
                false
            }
        }
    }

    fn restore_stash(&self, stashed: bool, warnings: &mut Vec<String>) {
        if !stashed {
            return;
        }
        match self.ctx.vcs.stash_pop() {
            Ok(()) => self.emit(PushEvent::StageFinished {
                stage: Stage::Unstash,
                detail: Some("local changes restored".to_string()),
            }),
            Err(err) => self.warning(
                Stage::Unstash,
                format!(
                    "could not restore stashed changes ({}); run `git stash pop` manually",
                    err
                ),
                warnings,
            ),
        }
    }

    fn warning(&self, stage: Stage, message: String, warnings: &mut Vec<String>) {
        info!("{}", message);
        self.emit(PushEvent::StageWarning {
            stage,
            message: message.clone(),
        });
        warnings.push(message);
    }

    fn emit(&self, event: PushEvent) {
        self.ctx.events.on_event(event);
    }
}
