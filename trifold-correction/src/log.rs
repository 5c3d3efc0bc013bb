//! Append-only correction trail for one verify/correct cycle.
//!
//! Each cycle's entries form a causal chain: `detected` before `localized`
//! before `corrected` before `validated`, with `failed` only as a terminal
//! entry. The chain ordering is a tested invariant, not a convention.

use chrono::Utc;
use trifold_core::models::{CorrectionLogEntry, LogAction};
use trifold_core::record::Dimension;

/// In-memory log buffer owned by a single verify/correct cycle.
#[derive(Debug, Default)]
pub struct CorrectionLog {
    entries: Vec<CorrectionLogEntry>,
}

impl CorrectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a cycle from entries produced by an earlier stage.
    pub fn from_entries(entries: Vec<CorrectionLogEntry>) -> Self {
        Self { entries }
    }

    /// Append one entry. Entries are never removed or reordered.
    pub fn record(
        &mut self,
        action: LogAction,
        dimension: Option<Dimension>,
        hash_before: Option<String>,
        hash_after: Option<String>,
        reason: impl Into<String>,
    ) {
        self.entries.push(CorrectionLogEntry {
            timestamp: Utc::now(),
            dimension,
            action,
            hash_before,
            hash_after,
            reason: reason.into(),
        });
    }

    pub fn entries(&self) -> &[CorrectionLogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CorrectionLogEntry> {
        self.entries
    }
}

/// Check the causal ordering invariant for one cycle's entries.
///
/// Stages must appear in strictly increasing order; `failed` is only valid
/// as the final entry.
pub fn is_causal_chain(entries: &[CorrectionLogEntry]) -> bool {
    let mut last_stage = -1i32;
    for (i, entry) in entries.iter().enumerate() {
        let stage = match entry.action {
            LogAction::Detected => 0,
            LogAction::Localized => 1,
            LogAction::Corrected => 2,
            LogAction::Validated => 3,
            LogAction::Failed => return i == entries.len() - 1,
        };
        if stage <= last_stage {
            return false;
        }
        last_stage = stage;
    }
    true
}
