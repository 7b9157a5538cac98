//! Push Event Port
//!
//! Observable progress of push and rollback runs. The CLI renders these
//! as text lines or NDJSON.

use std::fmt;
use std::path::PathBuf;

use super::toolchain::ProbeOutcome;
use super::transfer::TransferMode;
use crate::domain::value_objects::DeployKind;

/// Step of the push/rollback sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Probe,
    Stash,
    Build,
    Install,
    Transfer,
    Record,
    Unstash,
    Checkout,
    Restore,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Probe => "probe",
            Stage::Stash => "stash",
            Stage::Build => "build",
            Stage::Install => "install",
            Stage::Transfer => "transfer",
            Stage::Record => "record",
            Stage::Unstash => "unstash",
            Stage::Checkout => "checkout",
            Stage::Restore => "restore",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during push and rollback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// Push started
    Started {
        root: PathBuf,
        target: String,
        dry_run: bool,
    },

    /// Pre-flight results: repository presence and chosen tool
    Preflight {
        repository: bool,
        tool: &'static str,
        mode: TransferMode,
    },

    /// Connectivity probe finished (never gates the push)
    Probed { outcome: ProbeOutcome },

    StageStarted { stage: Stage, detail: String },

    StageFinished { stage: Stage, detail: Option<String> },

    StageSkipped { stage: Stage, reason: String },

    /// Non-fatal failure, the run continues
    StageWarning { stage: Stage, message: String },

    /// A deployment record was appended
    Recorded {
        ordinal: usize,
        kind: DeployKind,
        revision: Option<String>,
    },

    /// Push completed
    Completed {
        dry_run: bool,
        files: Option<usize>,
    },
}

/// Trait for receiving push events
pub trait PushEventSink {
    fn on_event(&self, event: PushEvent);
}

/// No-op event sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl PushEventSink for NoopEventSink {
    fn on_event(&self, _event: PushEvent) {}
}
