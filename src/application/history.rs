//! History listing
//!
//! Newest-first rows for `ftpush history`, shared by the text and JSON
//! renderers.

use serde::Serialize;

use crate::domain::entities::History;
use crate::domain::value_objects::DeployKind;

/// One listed deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub ordinal: usize,
    pub timestamp: String,
    pub user: String,
    pub kind: DeployKind,
    pub revision: Option<String>,
}

impl HistoryEntry {
    /// Short revision, or `-` when none was recorded
    pub fn short_revision(&self) -> &str {
        match self.revision.as_deref() {
            Some(rev) => rev.get(..7).unwrap_or(rev),
            None => "-",
        }
    }
}

/// Listing of at most `limit` records plus the total retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryListing {
    pub total: usize,
    pub entries: Vec<HistoryEntry>,
}

pub fn list_history(history: &History, limit: usize) -> HistoryListing {
    let entries = history
        .recent(limit)
        .into_iter()
        .map(|(ordinal, record)| HistoryEntry {
            ordinal,
            timestamp: record.timestamp_iso(),
            user: record.user().to_string(),
            kind: record.kind(),
            revision: record.revision().map(str::to_string),
        })
        .collect();
    HistoryListing {
        total: history.len(),
        entries,
    }
}
