//! Deployment history entity
//!
//! An append-only log of deployments, oldest first, bounded to
//! [`MAX_HISTORY`] entries. Records are addressed by a 1-based ordinal
//! counted from the oldest retained record. Ordinals are positional: after
//! old records are evicted, the same deployment answers to a lower number.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::value_objects::DeployKind;

/// Maximum number of records retained in a profile.
pub const MAX_HISTORY: usize = 20;

/// How many older records the interactive rollback picker offers.
pub const ROLLBACK_CANDIDATES: usize = 4;

/// One logged deployment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    timestamp: DateTime<Utc>,
    user: String,
    kind: DeployKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision: Option<String>,
}

impl DeploymentRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        user: impl Into<String>,
        kind: DeployKind,
        revision: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            user: user.into(),
            kind,
            revision: revision.filter(|r| !r.trim().is_empty()),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO-8601 timestamp with second precision, e.g. `2026-10-14T09:30:00Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn kind(&self) -> DeployKind {
        self.kind
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// First 7 characters of the revision, git-style.
    pub fn short_revision(&self) -> Option<&str> {
        self.revision
            .as_deref()
            .map(|r| r.get(..7).unwrap_or(r))
    }
}

/// Bounded deployment log, serialized as a plain JSON array.
///
/// Deserializing an oversized array keeps only the newest records, so the
/// cap holds for every loaded profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<DeploymentRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored records, keeping only the newest [`MAX_HISTORY`].
    pub fn from_records(records: Vec<DeploymentRecord>) -> Self {
        let mut history = Self { records };
        history.truncate();
        history
    }

    /// Append a record and evict the oldest ones beyond the cap.
    ///
    /// Returns the ordinal the new record answers to.
    pub fn push(&mut self, record: DeploymentRecord) -> usize {
        self.records.push(record);
        self.truncate();
        self.records.len()
    }

    fn truncate(&mut self) {
        if self.records.len() > MAX_HISTORY {
            let excess = self.records.len() - MAX_HISTORY;
            self.records.drain(..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a 1-based ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&DeploymentRecord> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
    }

    /// Most recent record (the one currently live on the remote).
    pub fn latest(&self) -> Option<&DeploymentRecord> {
        self.records.last()
    }

    /// Revision of the newest record that carries one.
    pub fn latest_revision(&self) -> Option<&str> {
        self.records.iter().rev().find_map(|r| r.revision())
    }

    /// All records with their ordinals, oldest first.
    pub fn numbered(&self) -> impl DoubleEndedIterator<Item = (usize, &DeploymentRecord)> + '_ {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// Newest-first view of at most `limit` records.
    pub fn recent(&self, limit: usize) -> Vec<(usize, &DeploymentRecord)> {
        self.numbered().rev().take(limit).collect()
    }

    /// Records offered by the interactive rollback picker: the newest
    /// [`ROLLBACK_CANDIDATES`] records excluding the current one.
    pub fn rollback_candidates(&self) -> Vec<(usize, &DeploymentRecord)> {
        self.numbered()
            .rev()
            .skip(1)
            .take(ROLLBACK_CANDIDATES)
            .collect()
    }

    /// Resolve a rollback ordinal to its record.
    ///
    /// Fails when there is nothing to roll back to, when the ordinal is
    /// outside `1..=len`, or when the record has no revision to check out.
    pub fn resolve_rollback_target(
        &self,
        ordinal: usize,
    ) -> Result<&DeploymentRecord, HistoryError> {
        let len = self.records.len();
        if len < 2 {
            return Err(HistoryError::InsufficientHistory { len });
        }
        let record = self
            .get(ordinal)
            .ok_or(HistoryError::OrdinalOutOfRange { ordinal, len })?;
        if record.revision().is_none() {
            return Err(HistoryError::MissingRevision { ordinal });
        }
        Ok(record)
    }

    /// Guard used before prompting for a target.
    pub fn ensure_rollback_possible(&self) -> Result<(), HistoryError> {
        if self.records.len() < 2 {
            return Err(HistoryError::InsufficientHistory {
                len: self.records.len(),
            });
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<DeploymentRecord>::deserialize(deserializer).map(History::from_records)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("rollback needs at least 2 deployments in history (found {len})")]
    InsufficientHistory { len: usize },

    #[error("deployment #{ordinal} does not exist (valid range: 1-{len})")]
    OrdinalOutOfRange { ordinal: usize, len: usize },

    #[error("deployment #{ordinal} has no git revision recorded and cannot be restored")]
    MissingRevision { ordinal: usize },
}
